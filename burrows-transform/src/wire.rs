//! BWT stream framing.
//!
//! A framed block is a big-endian `u32` first index followed by the
//! transformed bytes. There is no length field; the block runs to the end of
//! the stream.

use std::io::{Read, Write};

use burrows_core::{BurrowsError, Result};

use crate::bwt::{BwtBlock, validate_first_index};

/// Size of the first-index header.
pub const HEADER_LEN: usize = 4;

impl BwtBlock {
    /// Encode the header as big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if the first index does not fit the
    /// 32-bit header.
    pub fn header(&self) -> Result<[u8; HEADER_LEN]> {
        let first = u32::try_from(self.first_index).map_err(|_| {
            BurrowsError::invalid_argument(format!(
                "first index {} does not fit a 32-bit header",
                self.first_index
            ))
        })?;
        Ok(first.to_be_bytes())
    }

    /// Serialize header and data into a new buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let header = self.header()?;
        let mut out = Vec::with_capacity(HEADER_LEN + self.data.len());
        out.extend_from_slice(&header);
        out.extend_from_slice(&self.data);
        Ok(out)
    }

    /// Write header and data to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let header = self.header()?;
        writer.write_all(&header)?;
        writer.write_all(&self.data)?;
        Ok(())
    }

    /// Parse a framed block.
    ///
    /// # Errors
    ///
    /// Returns a corrupt stream error if `bytes` is shorter than the header
    /// or the first index is not a row of the block.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(BurrowsError::corrupt_stream(format!(
                "stream of {} bytes is shorter than the {HEADER_LEN}-byte header",
                bytes.len()
            )));
        }

        let (header, data) = bytes.split_at(HEADER_LEN);
        let first = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
        validate_first_index(first, data.len())?;

        Ok(Self::new(first, data.to_vec()))
    }

    /// Read a framed block until end of stream.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bwt;

    #[test]
    fn test_frame_layout() {
        let block = bwt::forward(b"ABRACADABRA!");
        let bytes = block.to_bytes().unwrap();
        assert_eq!(&bytes[..HEADER_LEN], &[0, 0, 0, 3]);
        assert_eq!(&bytes[HEADER_LEN..], b"ARD!RCAAAABB");

        let mut written = Vec::new();
        block.write_to(&mut written).unwrap();
        assert_eq!(written, bytes);
    }

    #[test]
    fn test_parse_frame() {
        let block = BwtBlock::from_bytes(b"\x00\x00\x00\x03ARD!RCAAAABB").unwrap();
        assert_eq!(block.first_index, 3);
        assert_eq!(block.invert().unwrap(), b"ABRACADABRA!");
    }

    #[test]
    fn test_empty_frame() {
        let bytes = bwt::forward(b"").to_bytes().unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 0]);
        let block = BwtBlock::from_bytes(&bytes).unwrap();
        assert!(block.invert().unwrap().is_empty());
    }

    #[test]
    fn test_short_frame() {
        for len in 0..HEADER_LEN {
            let err = BwtBlock::from_bytes(&vec![0u8; len]).unwrap_err();
            assert!(err.is_corrupt_stream(), "length {len}");
        }
    }

    #[test]
    fn test_first_index_out_of_range() {
        let err = BwtBlock::from_bytes(b"\x00\x00\x00\x0cARD!RCAAAABB").unwrap_err();
        assert!(err.is_corrupt_stream());

        let err = BwtBlock::from_bytes(b"\xff\x00\x00\x00A").unwrap_err();
        assert!(err.is_corrupt_stream());
    }

    #[test]
    fn test_header_overflow() {
        if let Some(first) = (u32::MAX as usize).checked_add(1) {
            let block = BwtBlock::new(first, vec![0]);
            assert!(block.to_bytes().unwrap_err().is_invalid_argument());
        }
    }

    #[test]
    fn test_read_from() {
        let mut reader = &b"\x00\x00\x00\x00A"[..];
        let block = BwtBlock::read_from(&mut reader).unwrap();
        assert_eq!(block, BwtBlock::new(0, b"A".to_vec()));
    }
}
