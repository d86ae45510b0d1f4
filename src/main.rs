use clap::{Parser, Subcommand, ValueEnum};
use gameday::commands;
use gameday::config;
use gameday::data_provider::SportsDataProvider;
use gameday_api::{Client, League};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "gameday")]
#[command(
    about = "MLB and NFL scores CLI",
    long_about = "MLB and NFL scores CLI\n\nIf no command is specified, today's scores for the default league are shown."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use fixture data instead of the live APIs
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LeagueArg {
    Mlb,
    Nfl,
}

impl From<LeagueArg> for League {
    fn from(arg: LeagueArg) -> Self {
        match arg {
            LeagueArg::Mlb => League::Mlb,
            LeagueArg::Nfl => League::Nfl,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display scores with period-by-period breakdown
    Scores {
        /// League (defaults to the configured default league)
        #[arg(short, long)]
        league: Option<LeagueArg>,

        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display the daily schedule of games
    Schedule {
        /// League (defaults to the configured default league)
        #[arg(short, long)]
        league: Option<LeagueArg>,

        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display the boxscore for a specific game
    Boxscore {
        /// League (defaults to the configured default league)
        #[arg(short, long)]
        league: Option<LeagueArg>,

        /// Game ID (e.g., 745804)
        game_id: String,
    },
    /// Display broadcast listings for a date
    Broadcasts {
        /// League (defaults to the configured default league)
        #[arg(short, long)]
        league: Option<LeagueArg>,

        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn create_client(cli: &Cli) -> Box<dyn SportsDataProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Box::new(gameday::dev::mock_client::MockClient::new());
    }
    let _ = cli;
    Box::new(Client::new())
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn SportsDataProvider,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    let league = |arg: Option<LeagueArg>| arg.map(League::from).unwrap_or(config.default_league);
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Scores { league: l, date } => {
            commands::scores::run(client, config, league(l), date).await
        }
        Commands::Schedule { league: l, date } => {
            commands::schedule::run(client, config, league(l), date).await
        }
        Commands::Boxscore { league: l, game_id } => {
            commands::boxscore::run(client, config, league(l), &game_id).await
        }
        Commands::Broadcasts { league: l, date } => {
            commands::broadcasts::run(client, config, league(l), date).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let mut cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need a client)
    if let Some(Commands::Config) = cli.command {
        if let Err(e) = commands::config::run(&config) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    // No subcommand shows today's scores for the default league
    let command = match cli.command.take() {
        Some(command) => command,
        None => Commands::Scores {
            league: None,
            date: None,
        },
    };

    let client = create_client(&cli);
    if let Err(e) = execute_command(client.as_ref(), &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
