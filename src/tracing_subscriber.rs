use tracing_subscriber::{util::SubscriberInitExt, EnvFilter, FmtSubscriber};

/// Initialize the global subscriber.
///
/// `RUST_LOG` takes precedence; without it the default level is `warn`, or
/// `debug` when `--debug` was given. Logs go to stderr, command output owns
/// stdout.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .init();
}
