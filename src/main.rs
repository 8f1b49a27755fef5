mod api;
mod app;
mod backgrounds;
mod config;
mod dungeons;
mod error;
mod input;
mod interaction;
mod normalize;
mod profile;
mod rating;
mod realms;
mod region;
mod roster;
mod runtime;
mod tracker;
mod tui;
mod ui;

use std::path::Path;
use std::sync::OnceLock;

use error::AppError;
use runtime::AppRuntime;

static TRACING_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static TRACING_INIT: OnceLock<()> = OnceLock::new();

fn init_logging(log_dir: &Path) {
    TRACING_INIT.get_or_init(|| {
        if let Err(err) = std::fs::create_dir_all(log_dir) {
            eprintln!(
                "failed to create log directory {}: {err}",
                log_dir.display()
            );
            return;
        }

        let file_appender = tracing_appender::rolling::daily(log_dir, "mplus-tracker.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = TRACING_GUARD.set(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(non_blocking)
            .with_ansi(false)
            .init();
    });
}

fn main() -> Result<(), AppError> {
    let cfg = crate::config::Config::load();
    init_logging(&cfg.log_dir());
    crate::tui::install_panic_hook();
    tracing::info!(data_dir = %cfg.data_dir.display(), api = %cfg.api_base_url, "starting");

    let mut runtime = AppRuntime::new(cfg)?;
    let result = runtime.run();
    if let Err(err) = runtime.shutdown() {
        tracing::error!(error = %err, "failed to restore terminal");
    }
    result
}
