//! Logging setup shared by the `numextenso` binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` ("warn", "info", "debug", ...)
/// is used. Calling it twice is harmless, the second call is ignored.
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    let _ = tracing::subscriber::set_global_default(subscriber);
}
