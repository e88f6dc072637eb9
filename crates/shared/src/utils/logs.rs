use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: env-filtered stdout plus a daily-rolling
/// file under `logs/`. The returned guard must be held for the process
/// lifetime or the file writer stops flushing.
pub fn init_logger(service_name: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", format!("{service_name}.log"));
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    guard
}
