use tracing_subscriber::EnvFilter;

use topstocks::cli;

fn main() {
    // Keep the console to the progress lines unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    cli::run();
}
