use anyhow::{ Context, Result };
use clap::Parser;
use dotenv::dotenv;
use log::{ debug, info };

use correio::CorreioConfig;

mod cli;
use cli::commands::OutputFormat;
use cli::{ CorreioCli, Commands };

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = CorreioCli::parse();

    // .env may carry CORREIO_PROVIDERS
    let env_loaded = dotenv().is_ok();

    // Setup logging
    setup_logging(&cli.log_level);
    if env_loaded {
        debug!("Loaded environment variables from .env file");
    }

    let format = OutputFormat::parse(&cli.output_format)?;
    let config = load_config(&cli)?;

    let outcome = match &cli.command {
        Commands::Translate { text, to, from, sender, recipient } => {
            cli::commands::translate::execute(
                &config,
                text,
                to,
                from.as_deref(),
                sender,
                recipient,
                format
            )
        }
        Commands::AdapterDemo => cli::commands::adapter_demo::execute(&config, format),
        Commands::ObserverDemo => cli::commands::observer_demo::execute(),
        Commands::Languages => cli::commands::languages::execute(&config, format),
        Commands::Quota => cli::commands::quota::execute(&config, format),
    };

    if let Err(e) = outcome {
        cli::ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
    Ok(())
}

fn load_config(cli: &CorreioCli) -> Result<CorreioConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            CorreioConfig::from_file(path).with_context(||
                format!("Could not load configuration from {}", path.display())
            )?
        }
        None => {
            debug!("No configuration file given, using defaults");
            CorreioConfig::default()
        }
    };

    config.apply_env_overrides()?;
    Ok(config)
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
