use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cocktails::catalog::CatalogClient;
use cocktails::cli::{self, Session};
use cocktails::config::AppConfig;
use cocktails::localization::LocalizationManager;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging; session output owns stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!("Starting cocktail shopping list");

    let config = AppConfig::from_env()?;
    info!(
        api = %config.api_base_url,
        system = %config.measurement_system,
        "Configuration loaded"
    );

    let catalog = CatalogClient::new(&config)?;
    let messages = LocalizationManager::new()?;
    let welcome = messages.t("welcome");

    let mut session = Session::new(&config, messages);
    cli::run(&mut session, &catalog, &welcome).await
}
