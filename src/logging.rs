use tracing_subscriber::EnvFilter;

/// Sends tracing output to stderr. `RUST_LOG` wins over the default level,
/// which is `warn`, or `debug` when `debug` is set.
pub fn init(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}
