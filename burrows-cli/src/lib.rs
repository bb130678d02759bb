//! Burrows CLI - stdin/stdout filters for the BWT and MTF transforms.
//!
//! Each binary takes a single direction flag:
//!
//! ```text
//! burrows-wheeler - < input > transformed
//! burrows-wheeler + < transformed > input
//! move-to-front - < transformed > ranks
//! bwmtf - < input > ranks
//! ```

pub mod args;
pub mod filter;
pub mod logging;

pub use args::{DirectionArg, FilterArgs, SortArg};
pub use filter::{Stage, run, run_stdio};
pub use logging::init_logging;

/// Parse-independent entry point used by every binary.
///
/// Returns the process exit status.
pub fn execute(stage: Stage, args: &FilterArgs) -> i32 {
    init_logging(args.verbose);

    match run_stdio(stage, args.direction.into(), args.config()) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
