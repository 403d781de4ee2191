use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use htech_store::{config::AppConfig, storage::JsonStorage, store::Store};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,htech_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let store = Store::open(JsonStorage::new(&config.data_dir))?;
    // Force a write so the state file exists even before the first mutation.
    store.flush()?;

    println!(
        "Store ready at {} ({} products, {} orders)",
        config.data_dir.display(),
        store.products().len(),
        store.orders().len()
    );
    Ok(())
}
