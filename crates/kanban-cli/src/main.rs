mod cli;
mod logging;

use clap::Parser;
use cli::Cli;
use kanban_core::AppConfig;
use kanban_persistence::{SqliteStore, TaskStore};
use kanban_tui::App;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_path = logging::log_file_path(std::env::var_os(logging::LOG_FILE_ENV));
    logging::init(log_path.as_deref())?;

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let database = config.effective_database(cli.db.as_deref());
    let tick_rate = Duration::from_millis(config.effective_tick_rate_ms());
    tracing::info!("Using database {}", database.display());

    let store: Arc<dyn TaskStore> = Arc::new(SqliteStore::new(database));
    let mut app = App::new();
    app.run(store, tick_rate).await?;

    Ok(())
}
