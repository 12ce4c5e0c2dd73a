pub mod app;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod input;
pub mod logging;
pub mod render;
pub mod review;
pub mod state;
pub mod storage;
pub mod view;
pub mod weather;
pub use error::{AppError, AppResult};

use storage::FileStore;

/// Entrypoint used by the terminal binary: an interactive session on stdin/stdout.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting temple-album");

    let config = config::load_app_config();
    let storage_path = config
        .resolve_storage_path()
        .map_err(|_| storage::StorageError::MissingHomeDirectory)?;
    let store = FileStore::open(storage_path);

    let mut app = app::App::new(config, store)?;
    let stdin = std::io::stdin();
    app.run_lines(stdin.lock(), std::io::stdout().lock())?;

    tracing::info!(favorites = app.gallery().favorites().len(), "session finished");
    Ok(())
}
