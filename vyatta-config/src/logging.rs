use tracing_subscriber::EnvFilter;

/// Build the log filter from `-v` repetitions unless `RUST_LOG` is set.
pub fn create_env_filter(verbosity: u8) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbosity {
            0 => EnvFilter::new("vyatta_config=warn"),
            1 => EnvFilter::new("vyatta_config=info"),
            2 => EnvFilter::new("vyatta_config=debug"),
            _ => EnvFilter::new("vyatta_config=trace"),
        }
    }
}

/// Initialize console logging on stderr so stdout stays machine readable.
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(create_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
