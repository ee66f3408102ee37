use anyhow::{Context, Result};
use buscadoc::backend::HttpBackend;
use buscadoc::cli::CliArgs;
use buscadoc::config::Config;
use buscadoc::logger::Logger;
use buscadoc::ui;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    if let Some(target) = args.generate_config_target() {
        let path = match target {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
        config.validate().context("Invalid --server value")?;
    }

    let logger = Logger::from_config(config.logging.enabled)?;
    if logger.is_enabled() {
        logger.log(format!("Logging to {}", Logger::get_log_file_path()?.display()));
    }

    let backend = HttpBackend::new(&config.server.base_url, config.server.timeout())
        .context("Failed to create HTTP client")?;
    logger.log(format!("Server: {}", backend.base_url()));

    ui::run_app(Arc::new(backend), &config, logger, args.from_login).await
}
