use std::{env, io};

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Console and rolling file logging. `RUST_LOG` sets the filter,
/// `RUST_LOG_FILE` moves the log file (default `logs/cubelet.log`).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let log_path = env::var("RUST_LOG_FILE").unwrap_or_else(|_| "logs/cubelet.log".to_string());
    let path = std::path::PathBuf::from(&log_path);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("."))
        .to_path_buf();
    let file = path
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("cubelet.log"))
        .to_os_string();
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file));
    let _ = FILE_GUARD.set(guard);

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    // Route panics through the subscriber so they land in the file log too
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("{info}");
    }));
}
