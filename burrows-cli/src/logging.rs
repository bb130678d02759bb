//! Logger setup for the filter binaries.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Map `-v` occurrences to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install a terminal logger on stderr; stdout carries the data stream.
pub fn init_logging(verbosity: u8) {
    // A logger may already be installed when embedded; keep it
    let _ = TermLogger::init(
        level_for(verbosity),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
