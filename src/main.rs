use clap::Parser;
use parlay::cli::{self, Cli, Commands, OutputMode};
use parlay::config::{AppConfig, LoggingConfig};
use parlay::error::{ParlayError, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)?;
    init_logging(&config.logging);

    if let Err(errors) = config.validate() {
        return Err(ParlayError::Validation(errors.join("; ")));
    }

    let mode = OutputMode::from_json_flag(cli.json);

    match cli.command {
        Commands::Convert { odds } => cli::convert_odds(odds, mode),
        Commands::Payout { stake, odds } => {
            cli::show_payout(stake, odds, &config.betting, mode)
        }
        Commands::Combine { odds, stake } => {
            cli::combine_parlay(&odds, stake, &config.betting, mode)
        }
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,parlay={}", config.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
