use anyhow::Context;
use clap::Parser;
use graph_model_sdk::cli::{self, Cli};
use graph_model_sdk::store::{InMemoryBackingStoreFactory, set_backing_store_factory};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = args.load_config().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    set_backing_store_factory(InMemoryBackingStoreFactory::from_config(&config))?;

    cli::run(&args.command, &config)?;
    Ok(())
}
