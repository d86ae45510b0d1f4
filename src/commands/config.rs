use crate::config::{self, Config};
use crate::formatting::{format_header, BoxChars};
use anyhow::Result;

/// Print the effective configuration, after defaults and the config file
/// have been merged.
pub fn run(config: &Config) -> Result<()> {
    let chars = BoxChars::from_display(&config.display);
    print!("\n{}", format_header("Configuration", true, &chars));

    match config::get_config_path() {
        Some(path) => println!("File: {}", path.display()),
        None => println!("File: (none)"),
    }
    println!("log_level = {:?}", config.log_level);
    println!("log_file = {:?}", config.log_file);
    println!("default_league = {:?}", config.default_league.id());
    println!("time_format = {:?}", config.time_format);
    println!("display.use_unicode = {}", config.display.use_unicode);
    println!();
    Ok(())
}
