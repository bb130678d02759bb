//! Burrows-Wheeler Transform.
//!
//! The forward transform sorts every cyclic rotation of a block and keeps the
//! last column of the sorted rotation matrix, together with the rank of the
//! unrotated block. Bytes that precede similar contexts end up next to each
//! other, which is what makes a following Move-to-Front stage effective.
//!
//! The inverse never rebuilds the rotation matrix. A counting pass over the
//! last column gives the first column (its sorted copy) and the LF-mapping
//! between the two, and following that mapping from the original row yields
//! the block in order. Time is O(n + 256), extra space O(n).

use burrows_core::{BurrowsError, Result};
use log::debug;

use crate::config::{SortStrategy, TransformConfig};
use crate::radix;
use crate::suffix::CircularSuffixArray;

/// Output of the forward transform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BwtBlock {
    /// Rank of the unrotated block among the sorted rotations.
    pub first_index: usize,
    /// Last column of the sorted rotation matrix.
    pub data: Vec<u8>,
}

impl BwtBlock {
    /// Create a block from its parts.
    pub fn new(first_index: usize, data: Vec<u8>) -> Self {
        Self { first_index, data }
    }

    /// Number of bytes in the block.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for the transform of an empty input.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reconstruct the original bytes.
    pub fn invert(&self) -> Result<Vec<u8>> {
        inverse(self.first_index, &self.data)
    }

    /// Split into `(first_index, data)`.
    pub fn into_parts(self) -> (usize, Vec<u8>) {
        (self.first_index, self.data)
    }
}

/// Forward transform with the default configuration.
pub fn forward(text: &[u8]) -> BwtBlock {
    forward_with(text, &TransformConfig::default())
}

/// Forward transform with an explicit configuration.
///
/// An empty input is a valid no-op and yields an empty block with
/// `first_index == 0`.
pub fn forward_with(text: &[u8], config: &TransformConfig) -> BwtBlock {
    if text.is_empty() {
        return BwtBlock::default();
    }

    let n = text.len();
    let suffixes = CircularSuffixArray::with_strategy(text, config.sort);

    let mut first_index = 0;
    let data: Vec<u8> = suffixes
        .as_slice()
        .iter()
        .enumerate()
        .map(|(rank, &offset)| {
            if offset == 0 {
                first_index = rank;
            }
            // Byte cyclically preceding the rotation start
            text[(offset + n - 1) % n]
        })
        .collect();

    debug!("bwt forward: {} bytes, first index {}", n, first_index);
    BwtBlock::new(first_index, data)
}

/// Forward transform using a specific suffix sorter.
pub fn forward_with_strategy(text: &[u8], sort: SortStrategy) -> BwtBlock {
    forward_with(text, &TransformConfig::new().with_sort(sort))
}

/// Check that `first` is a valid row index for a block of `len` bytes.
///
/// The empty block has no rows; it is only accepted with `first == 0`,
/// which is what [`forward`] emits for it.
pub fn validate_first_index(first: usize, len: usize) -> Result<()> {
    if len == 0 && first != 0 {
        return Err(BurrowsError::corrupt_stream(format!(
            "first index {first} for an empty block"
        )));
    }
    if len > 0 && first >= len {
        return Err(BurrowsError::corrupt_stream(format!(
            "first index {first} out of range for block of {len} bytes"
        )));
    }
    Ok(())
}

/// Inverse transform.
///
/// # Errors
///
/// Returns a corrupt stream error when `first` is not a row of `data`.
/// Nothing is produced in that case.
pub fn inverse(first: usize, data: &[u8]) -> Result<Vec<u8>> {
    validate_first_index(first, data.len())?;

    let n = data.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let counts = radix::histogram(data);
    let starts = radix::bucket_starts(&counts);

    // First column, emitted straight from the buckets
    let mut sorted = Vec::with_capacity(n);
    for (byte, &count) in counts.iter().enumerate() {
        sorted.resize(sorted.len() + count, byte as u8);
    }

    // LF-mapping: the k-th occurrence of a byte in the last column is the
    // k-th occurrence of that byte in the first column
    let mut next = vec![0usize; n];
    let mut positions = starts;
    for (row, &byte) in data.iter().enumerate() {
        next[positions[byte as usize]] = row;
        positions[byte as usize] += 1;
    }

    let mut result = Vec::with_capacity(n);
    let mut row = first;
    for _ in 0..n {
        result.push(sorted[row]);
        row = next[row];
    }

    debug!("bwt inverse: {} bytes from row {}", n, first);
    Ok(result)
}
