use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with the prompt on stdout.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|error| {
        eprintln!("Invalid log filter {filter:?} ({error}), using \"warn\"");
        EnvFilter::new("warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
