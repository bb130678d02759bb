//! Byte histograms and bucket offsets.

use crate::ALPHABET_SIZE;

/// Number of occurrences of each byte value.
pub(crate) fn histogram(data: &[u8]) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0usize; ALPHABET_SIZE];
    for &b in data {
        counts[b as usize] += 1;
    }
    counts
}

/// Exclusive prefix sums: `starts[v]` is the number of bytes strictly less
/// than `v`, i.e. the first slot of bucket `v` in sorted order.
pub(crate) fn bucket_starts(counts: &[usize; ALPHABET_SIZE]) -> [usize; ALPHABET_SIZE] {
    let mut starts = [0usize; ALPHABET_SIZE];
    let mut total = 0;
    for (start, &count) in starts.iter_mut().zip(counts.iter()) {
        *start = total;
        total += count;
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram() {
        let counts = histogram(b"ARD!RCAAAABB");
        assert_eq!(counts[b'A' as usize], 5);
        assert_eq!(counts[b'B' as usize], 2);
        assert_eq!(counts[b'!' as usize], 1);
        assert_eq!(counts.iter().sum::<usize>(), 12);
    }

    #[test]
    fn test_bucket_starts() {
        let starts = bucket_starts(&histogram(b"ARD!RCAAAABB"));
        assert_eq!(starts[0], 0);
        assert_eq!(starts[b'!' as usize], 0);
        assert_eq!(starts[b'A' as usize], 1);
        assert_eq!(starts[b'B' as usize], 6);
        assert_eq!(starts[b'C' as usize], 8);
        assert_eq!(starts[b'D' as usize], 9);
        assert_eq!(starts[b'R' as usize], 10);
        assert_eq!(starts[255], 12);
    }

    #[test]
    fn test_empty() {
        let starts = bucket_starts(&histogram(b""));
        assert!(starts.iter().all(|&s| s == 0));
    }
}
