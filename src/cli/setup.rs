//! Runtime initialization shared by both binaries

use log::LevelFilter;

/// Map the `-v` count to a default log level
pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(verbosity_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr);

    if let Err(e) = builder.try_init() {
        eprintln!("Note: Logger already configured: {}", e);
    }
}
