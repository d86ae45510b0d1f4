use gameday_api::League;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub default_league: League,
    pub time_format: String,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            default_league: League::Mlb,
            time_format: "%H:%M".to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { use_unicode: true }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    // Check if file exists
    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.default_league, League::Mlb);
        assert!(config.display.use_unicode);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
log_level = "debug"
log_file = "/tmp/gameday.log"
default_league = "nfl"
time_format = "%H:%M:%S"

[display]
use_unicode = false
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_league, League::Nfl);
        assert!(!config.display.use_unicode);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("default_league = \"nfl\"").unwrap();
        assert_eq!(config.default_league, League::Nfl);
        assert_eq!(config.log_level, "info");
        assert!(config.display.use_unicode);
    }

    #[test]
    fn test_unknown_league_fails_parse() {
        let parsed: Result<Config, _> = toml::from_str("default_league = \"xfl\"");
        assert!(parsed.is_err());
    }
}
