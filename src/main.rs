use anyhow::Context;
use clap::Parser;
use marina_registry::utils::{logger, validation::Validate};
use marina_registry::{
    BoatStore, CliConfig, ConfigProvider, CsvFileStore, MarinaError, Registry, SessionEnd, Shell,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let config = cli.resolve().context("failed to load configuration")?;

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose());
    }

    tracing::info!("Starting marina registry");
    if config.verbose() {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let store = CsvFileStore::new(config.data_file());
    let registry = match store.load(config.capacity()) {
        Ok(registry) => registry,
        Err(e @ MarinaError::LoadError { .. }) => {
            tracing::warn!("{} ({})", e, e.recovery_suggestion());
            println!("{}", e.user_friendly_message());
            Registry::with_capacity(config.capacity())
        }
        Err(e) => return Err(e).context("failed to read data file"),
    };

    let mut shell = Shell::new(registry, store);
    let stdin = std::io::stdin();
    let end = shell.run(stdin.lock(), std::io::stdout())?;

    match end {
        SessionEnd::Saved => tracing::info!("Session ended, data saved"),
        SessionEnd::SaveFailed => tracing::warn!("Session ended, data NOT saved"),
        SessionEnd::EndOfInput => tracing::info!("Input closed, exiting without saving"),
    }

    Ok(())
}
