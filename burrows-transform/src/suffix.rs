//! Circular suffix array.
//!
//! Orders all cyclic rotations of a block. Rotations are compared byte by
//! byte (unsigned), wrapping around the end of the block; two rotations that
//! are textually identical (the block is periodic) are ordered by their
//! starting offset, so the permutation never depends on which sorter ran.

use std::cmp::Ordering;

use burrows_core::{BurrowsError, Result};
use log::{debug, trace};

use crate::config::SortStrategy;
use crate::radix;

/// Sorted order of the cyclic rotations of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixArray {
    order: Vec<usize>,
}

impl CircularSuffixArray {
    /// Sort the rotations of `text` with the default strategy.
    pub fn new(text: &[u8]) -> Self {
        Self::with_strategy(text, SortStrategy::Auto)
    }

    /// Sort the rotations of `text` with an explicit strategy.
    pub fn with_strategy(text: &[u8], strategy: SortStrategy) -> Self {
        let strategy = strategy.resolve(text.len());
        debug!("suffix sort: {} bytes, strategy {}", text.len(), strategy);

        let order = match strategy {
            _ if text.is_empty() => Vec::new(),
            SortStrategy::Comparison | SortStrategy::Auto => sort_by_comparison(text),
            SortStrategy::PrefixDoubling => sort_by_prefix_doubling(text),
        };

        Self { order }
    }

    /// Length of the underlying block.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True for the array of an empty block.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Starting offset of the rotation ranked `i`-th.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error when `i` is not in `[0, len)`.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.order
            .get(i)
            .copied()
            .ok_or_else(|| BurrowsError::index_out_of_range(i, self.order.len()))
    }

    /// Rank of the unrotated block (the rotation starting at offset 0).
    pub fn original_rank(&self) -> Option<usize> {
        self.order.iter().position(|&offset| offset == 0)
    }

    /// The whole permutation.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Consume the array and return the permutation.
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }
}

/// Compare the rotations of `text` starting at `i` and `j`.
///
/// Identical rotations compare by offset, so this is a strict total order
/// over `0..text.len()`.
pub fn compare_rotations(text: &[u8], i: usize, j: usize) -> Ordering {
    compare_from(text, i, j, 0).then(i.cmp(&j))
}

/// Compare two rotations starting at byte `skip` of each.
fn compare_from(text: &[u8], a: usize, b: usize, skip: usize) -> Ordering {
    let n = text.len();
    for k in skip..n {
        match text[(a + k) % n].cmp(&text[(b + k) % n]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Comparison sort with a 4-byte key fast path.
fn sort_by_comparison(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    let key_len = n.min(4);

    // Big-endian packing keeps key order equal to byte order
    let keys: Vec<u32> = (0..n)
        .map(|i| (0..key_len).fold(0u32, |key, j| (key << 8) | text[(i + j) % n] as u32))
        .collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| {
        keys[a]
            .cmp(&keys[b])
            .then_with(|| compare_from(text, a, b, key_len))
            .then(a.cmp(&b))
    });
    order
}

/// Prefix doubling over cyclic rotations.
///
/// After the round with width `w`, `class[i]` ranks the first `2w` bytes of
/// rotation `i`. Each round is two linear counting passes, and the loop stops
/// once every class is distinct or the compared prefix covers the block.
fn sort_by_prefix_doubling(text: &[u8]) -> Vec<usize> {
    let n = text.len();

    let mut order = vec![0usize; n];
    let mut start = radix::bucket_starts(&radix::histogram(text));
    for (i, &b) in text.iter().enumerate() {
        order[start[b as usize]] = i;
        start[b as usize] += 1;
    }

    let mut class = vec![0usize; n];
    let mut classes = 1;
    for r in 1..n {
        if text[order[r]] != text[order[r - 1]] {
            classes += 1;
        }
        class[order[r]] = classes - 1;
    }

    let mut shifted = vec![0usize; n];
    let mut next_class = vec![0usize; n];
    let mut bucket = vec![0usize; n];
    let mut width = 1;

    while width < n && classes < n {
        // Rotations ordered by their second half
        for (slot, &offset) in shifted.iter_mut().zip(order.iter()) {
            *slot = (offset + n - width) % n;
        }

        // Stable counting sort by first half
        bucket[..classes].fill(0);
        for &offset in &shifted {
            bucket[class[offset]] += 1;
        }
        let mut sum = 0;
        for slot in bucket[..classes].iter_mut() {
            let count = *slot;
            *slot = sum;
            sum += count;
        }
        for &offset in &shifted {
            let c = class[offset];
            order[bucket[c]] = offset;
            bucket[c] += 1;
        }

        next_class[order[0]] = 0;
        classes = 1;
        for r in 1..n {
            let cur = (class[order[r]], class[(order[r] + width) % n]);
            let prev = (class[order[r - 1]], class[(order[r - 1] + width) % n]);
            if cur != prev {
                classes += 1;
            }
            next_class[order[r]] = classes - 1;
        }
        std::mem::swap(&mut class, &mut next_class);

        width <<= 1;
        trace!("prefix doubling: width {} -> {} classes", width, classes);
    }

    // Equal classes now mean identical rotations
    let mut lo = 0;
    while lo < n {
        let mut hi = lo + 1;
        while hi < n && class[order[hi]] == class[order[lo]] {
            hi += 1;
        }
        if hi - lo > 1 {
            order[lo..hi].sort_unstable();
        }
        lo = hi;
    }

    order
}
