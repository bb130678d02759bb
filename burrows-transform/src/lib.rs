//! Burrows-Wheeler and Move-to-Front transforms.
//!
//! This crate provides the reversible preprocessing stage of a block-sorting
//! compressor. The pipeline:
//! 1. Circular suffix sorting - Total order over all rotations of a block
//! 2. Burrows-Wheeler Transform (BWT) - Last column of the sorted rotations
//! 3. Move-to-Front Transform (MTF) - Recency ranks, mostly zeros after BWT
//!
//! Entropy coding of the MTF output is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use burrows_transform::{bwt, mtf};
//!
//! let block = bwt::forward(b"ABRACADABRA!");
//! assert_eq!(block.first_index, 3);
//! assert_eq!(block.data, b"ARD!RCAAAABB");
//!
//! let ranks = mtf::encode(&block.data);
//! let restored = bwt::inverse(block.first_index, &mtf::decode(&ranks)).unwrap();
//! assert_eq!(restored, b"ABRACADABRA!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
pub mod config;
pub mod mtf;
pub mod pipeline;
mod radix;
pub mod suffix;
pub mod wire;

pub use bwt::BwtBlock;
pub use config::{COMPARISON_SORT_THRESHOLD, SortStrategy, TransformConfig};
pub use mtf::{MtfList, MtfReader, MtfWriter};
pub use pipeline::{BurrowsWheeler, MoveToFront, Pipeline, compress, decompress};
pub use suffix::CircularSuffixArray;
pub use wire::HEADER_LEN;

/// Number of distinct byte values.
pub const ALPHABET_SIZE: usize = 256;
