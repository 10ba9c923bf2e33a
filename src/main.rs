use anyhow::Context;
use clap::Parser;
use data_fixtures::config::config_file::load_config_file;
use data_fixtures::core::config_path::fixtures_path;
use data_fixtures::utils::{logger, validation};
use data_fixtures::{CliConfig, FixturesError, ServiceRegistry};

fn check(config: &CliConfig) -> anyhow::Result<String> {
    let blob = load_config_file(&config.config)
        .with_context(|| format!("Failed to load config file '{}'", config.config))?;
    let registry = ServiceRegistry::new().with_config(blob);

    let path = fixtures_path(&registry)?;
    validation::validate_path("doctrine.fixtures", &path)?;

    if !validation::is_existing_directory(&path) {
        tracing::warn!("Fixtures directory {} does not exist yet", path);
    }
    Ok(path)
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Resolving fixtures directory from {}", config.config);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match check(&config) {
        Ok(path) => {
            tracing::info!("Fixtures directory: {}", path);
            println!("{}", path);
        }
        Err(e) => {
            tracing::error!("Fixtures check failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            if let Some(fixtures_error) = e.downcast_ref::<FixturesError>() {
                eprintln!("💡 {}", fixtures_error.recovery_suggestion());
            }
            std::process::exit(1);
        }
    }
}
