//! Transform stages behind the [`ByteTransform`] trait.
//!
//! Compression is BWT framing followed by MTF over the framed bytes, the
//! same bytes `burrows-wheeler - | move-to-front -` produces. Decompression
//! runs the stages in reverse.

use burrows_core::{ByteTransform, Result};
use log::debug;

use crate::bwt::{self, BwtBlock};
use crate::config::TransformConfig;
use crate::mtf;

/// Framed Burrows-Wheeler transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct BurrowsWheeler {
    config: TransformConfig,
}

impl BurrowsWheeler {
    /// Create a transform with the given configuration.
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }
}

impl ByteTransform for BurrowsWheeler {
    fn name(&self) -> &'static str {
        "burrows-wheeler"
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        bwt::forward_with(input, &self.config).to_bytes()
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        BwtBlock::from_bytes(input)?.invert()
    }
}

/// Move-to-Front rank stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveToFront;

impl ByteTransform for MoveToFront {
    fn name(&self) -> &'static str {
        "move-to-front"
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(mtf::encode(input))
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(mtf::decode(input))
    }
}

/// BWT followed by MTF.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    bwt: BurrowsWheeler,
    mtf: MoveToFront,
}

impl Pipeline {
    /// Create a pipeline with the given BWT configuration.
    pub fn new(config: TransformConfig) -> Self {
        Self {
            bwt: BurrowsWheeler::new(config),
            mtf: MoveToFront,
        }
    }
}

impl ByteTransform for Pipeline {
    fn name(&self) -> &'static str {
        "bwt+mtf"
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        let framed = self.bwt.forward(input)?;
        let ranks = self.mtf.forward(&framed)?;
        debug!("pipeline forward: {} -> {} bytes", input.len(), ranks.len());
        Ok(ranks)
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        let framed = self.mtf.inverse(input)?;
        let output = self.bwt.inverse(&framed)?;
        debug!("pipeline inverse: {} -> {} bytes", input.len(), output.len());
        Ok(output)
    }
}

/// Run the full forward pipeline with default settings.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    Pipeline::default().forward(data)
}

/// Undo [`compress`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Pipeline::default().inverse(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortStrategy;

    #[test]
    fn test_pipeline_matches_stages() {
        let framed = BurrowsWheeler::default().forward(b"ABRACADABRA!").unwrap();
        assert_eq!(framed, b"\x00\x00\x00\x03ARD!RCAAAABB");

        let compressed = compress(b"ABRACADABRA!").unwrap();
        assert_eq!(compressed, mtf::encode(&framed));
        assert_eq!(
            compressed,
            vec![0, 0, 0, 3, 65, 82, 69, 36, 2, 69, 4, 0, 0, 0, 69, 0]
        );
    }

    #[test]
    fn test_pipeline_roundtrip() {
        let test_cases = [
            b"".as_slice(),
            b"a",
            b"ABRACADABRA!",
            b"aaaaaaaaaabbbbbbbbbbcccccccccc",
            b"the quick brown fox jumps over the lazy dog",
        ];
        for data in test_cases {
            let compressed = compress(data).unwrap();
            assert_eq!(decompress(&compressed).unwrap(), data);
        }
    }

    #[test]
    fn test_roundtrip_check_all_stages() {
        let config = TransformConfig::new().with_sort(SortStrategy::PrefixDoubling);
        let stages: [&dyn ByteTransform; 3] = [
            &BurrowsWheeler::new(config),
            &MoveToFront,
            &Pipeline::new(config),
        ];
        for stage in stages {
            assert!(
                stage.roundtrip_check(b"mississippi").unwrap(),
                "{}",
                stage.name()
            );
        }
    }

    #[test]
    fn test_decompress_rejects_short_stream() {
        let err = decompress(&[0, 0]).unwrap_err();
        assert!(err.is_corrupt_stream());
    }

    #[test]
    fn test_bwt_inverse_rejects_bad_index() {
        let err = BurrowsWheeler::default()
            .inverse(b"\x00\x00\x00\x05abc")
            .unwrap_err();
        assert!(err.is_corrupt_stream());
    }
}
