use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use card_valuation::adapters::{FileBlobStorage, FileCatalogSource, InMemoryBlobStorage};
use card_valuation::application::{
    GetCardSummariesHandler, GetCardSummariesQuery, LoadActiveProfileHandler,
};
use card_valuation::config::{AppConfig, LoggingConfig, StorageBackend};
use card_valuation::domain::foundation::format_cents;
use card_valuation::ports::{BlobStorage, CatalogSource};

fn init_logging(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_logging(&config.logging)?;

    let storage: Arc<dyn BlobStorage> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryBlobStorage::new()),
        StorageBackend::File => Arc::new(FileBlobStorage::new(&config.storage.data_dir)),
    };

    let catalog = FileCatalogSource::new(&config.catalog.path).load()?;
    tracing::info!(
        cards = catalog.len(),
        path = %config.catalog.path.display(),
        "Catalog loaded"
    );

    let profiles = Arc::new(LoadActiveProfileHandler::new(
        storage,
        config.storage.account_key.clone(),
    ));
    let summaries = GetCardSummariesHandler::new(Arc::new(catalog), profiles);
    let view = summaries.handle(GetCardSummariesQuery::all());

    match &view.profile_id {
        Some(id) => tracing::info!(profile_id = %id, "Using stored valuations"),
        None => tracing::info!("No stored profile, using catalog defaults"),
    }

    for summary in &view.summaries {
        println!(
            "{}\t{}",
            summary.card_name,
            format_cents(summary.net_worth_cents)
        );
    }

    Ok(())
}
