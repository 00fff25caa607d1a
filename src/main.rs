use std::env;

use bookstore_queries::{
    logging::config_logging,
    models::app_config::AppConfig,
    report::Report,
    runner,
};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "bookstore.toml";

#[tokio::main]
async fn main() {
    let app_config = match load_config() {
        Ok(app_config) => app_config,
        Err(error) => {
            eprintln!("Error: Unable to load configuration [{0}]", error);
            std::process::exit(1);
        }
    };
    config_logging(&app_config.logging);
    info!("bookstore-queries started");

    let stdout = std::io::stdout();
    let mut report = Report::new(stdout.lock());
    runner::run(&app_config.database, &mut report).await;
}

fn load_config() -> Result<AppConfig, config::ConfigError> {
    let config_file = env::var("BOOKSTORE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    AppConfig::load(&config_file)
}
