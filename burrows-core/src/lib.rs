//! # Burrows Core
//!
//! Core components shared by the Burrows crates:
//!
//! - [`error`]: Error taxonomy (invalid argument, corrupt stream, I/O)
//! - [`traits`]: The [`ByteTransform`] trait every pipeline stage implements
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ CLI                                                     │
//! │     burrows-wheeler, move-to-front, bwmtf filters      │
//! ├─────────────────────────────────────────────────────────┤
//! │ Transform                                               │
//! │     suffix sort, BWT, MTF, framing, pipeline           │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     BurrowsError, ByteTransform                         │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod traits;

pub use error::{BurrowsError, Result};
pub use traits::{ByteTransform, Direction};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BurrowsError, Result};
    pub use crate::traits::{ByteTransform, Direction};
}
