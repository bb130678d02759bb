//! Move-to-Front Transform.
//!
//! MTF replaces each byte with its position in a recency list of the whole
//! byte alphabet, then moves that byte to the front. Runs produced by the
//! BWT turn into runs of zeros.
//!
//! Every session starts from the identity list `[0, 1, .., 255]` and owns its
//! list exclusively; encoder and decoder stay in lock step as long as both
//! start fresh and see the same symbol sequence.

use std::io::{self, Read, Write};

use burrows_core::{BurrowsError, Result};

use crate::ALPHABET_SIZE;

/// Recency-ordered list of all byte values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtfList {
    symbols: [u8; ALPHABET_SIZE],
}

impl MtfList {
    /// Create a list in identity order.
    pub fn new() -> Self {
        let mut symbols = [0u8; ALPHABET_SIZE];
        for (i, sym) in symbols.iter_mut().enumerate() {
            *sym = i as u8;
        }
        Self { symbols }
    }

    /// Restore identity order.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current list, front first.
    pub fn symbols(&self) -> &[u8; ALPHABET_SIZE] {
        &self.symbols
    }

    /// Encode a byte into its rank and move it to the front.
    pub fn encode(&mut self, byte: u8) -> u8 {
        let mut carried = self.symbols[0];
        if carried == byte {
            return 0;
        }

        // Shift the prefix right by one while scanning for `byte`
        let mut rank = 1;
        loop {
            std::mem::swap(&mut self.symbols[rank], &mut carried);
            if carried == byte {
                break;
            }
            rank += 1;
        }
        self.symbols[0] = byte;
        rank as u8
    }

    /// Decode a rank into its byte and move that byte to the front.
    pub fn decode(&mut self, rank: u8) -> u8 {
        let rank = rank as usize;
        let byte = self.symbols[rank];
        self.symbols.copy_within(0..rank, 1);
        self.symbols[0] = byte;
        byte
    }

    /// Decode a rank that may fall outside the alphabet.
    ///
    /// # Errors
    ///
    /// Returns a corrupt stream error for `rank >= 256`; the list is left
    /// untouched.
    pub fn try_decode(&mut self, rank: usize) -> Result<u8> {
        let rank = u8::try_from(rank).map_err(|_| {
            BurrowsError::corrupt_stream(format!(
                "MTF rank {rank} outside alphabet of {ALPHABET_SIZE}"
            ))
        })?;
        Ok(self.decode(rank))
    }

    /// Encode a buffer in place.
    pub fn encode_in_place(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte = self.encode(*byte);
        }
    }

    /// Decode a buffer of ranks in place.
    pub fn decode_in_place(&mut self, data: &mut [u8]) {
        for rank in data.iter_mut() {
            *rank = self.decode(*rank);
        }
    }
}

impl Default for MtfList {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform Move-to-Front transform with a fresh list.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut list = MtfList::new();
    data.iter().map(|&byte| list.encode(byte)).collect()
}

/// Perform inverse Move-to-Front transform with a fresh list.
pub fn decode(ranks: &[u8]) -> Vec<u8> {
    let mut list = MtfList::new();
    ranks.iter().map(|&rank| list.decode(rank)).collect()
}

/// Inverse transform over ranks wider than a byte.
///
/// Fails on the first rank outside `[0, 256)` without returning any output.
pub fn decode_ranks(ranks: &[usize]) -> Result<Vec<u8>> {
    let mut list = MtfList::new();
    ranks.iter().map(|&rank| list.try_decode(rank)).collect()
}

/// Streaming MTF encoder wrapping a writer.
pub struct MtfWriter<W: Write> {
    inner: W,
    list: MtfList,
    scratch: Vec<u8>,
}

impl<W: Write> MtfWriter<W> {
    /// Start encoding into `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            list: MtfList::new(),
            scratch: Vec::new(),
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for MtfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.scratch.clear();
        self.scratch.extend_from_slice(buf);
        self.list.encode_in_place(&mut self.scratch);
        self.inner.write_all(&self.scratch)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Streaming MTF decoder wrapping a reader of ranks.
pub struct MtfReader<R: Read> {
    inner: R,
    list: MtfList,
}

impl<R: Read> MtfReader<R> {
    /// Start decoding from `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            list: MtfList::new(),
        }
    }

    /// Return the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for MtfReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.list.decode_in_place(&mut buf[..n]);
        Ok(n)
    }
}
