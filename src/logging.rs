use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise logs at `debug` when verbose,
/// `warn` when not. Output goes to stderr so stdout stays for results.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(default_level),
        |directive| EnvFilter::new(&directive),
    );

    // A second init in the same process (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
