//! carpool - interactive shell for the ride-share database
//!
//! This is the main entry point for the carpool shell.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carpool_shell::{registry, Shell, ShellConfig, StdConsole};
use carpool_store::Store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,carpool=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting carpool shell");

    // Load configuration from environment
    let config = ShellConfig::from_env();
    tracing::info!(db_path = %config.db_path, "Configuration loaded");

    // Open the database and make sure the tables exist
    let store = Store::open(&config.db_path)?;
    store.init_schema()?;

    let registry = registry::standard();
    let mut shell = Shell::new(store, StdConsole, config.prompt);

    // Run the loop; the connection is released even if the loop failed.
    let result = shell.run(&registry);
    shell.close()?;
    result.map_err(Into::into)
}
