//! Core traits for reversible byte transforms.
//!
//! Every stage of the pipeline (BWT, MTF, and their composition) is a pure
//! whole-buffer transform with an exact inverse.

use crate::error::Result;

/// A reversible byte-to-byte transform.
///
/// Implementations hold configuration only. Any per-call state (suffix
/// arrays, counting tables, recency lists) is created inside `forward` and
/// `inverse` and dropped before they return, so a single value may be shared
/// between threads.
pub trait ByteTransform {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Apply the transform.
    fn forward(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Undo the transform.
    ///
    /// # Errors
    ///
    /// Returns a corrupt stream error when `input` cannot have been produced
    /// by [`ByteTransform::forward`].
    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Run `input` through `forward` then `inverse` and compare.
    fn roundtrip_check(&self, input: &[u8]) -> Result<bool> {
        let encoded = self.forward(input)?;
        let decoded = self.inverse(&encoded)?;
        Ok(decoded == input)
    }
}

/// Direction of a filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward transform (encode).
    Forward,
    /// Inverse transform (decode).
    Inverse,
}

impl Direction {
    /// Apply `transform` in this direction.
    pub fn apply<T: ByteTransform + ?Sized>(self, transform: &T, input: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Forward => transform.forward(input),
            Self::Inverse => transform.inverse(input),
        }
    }
}
