//! Stream filters shared by the binaries.

use std::io::{self, BufWriter, Read, Write};

use burrows_core::{ByteTransform, Direction, Result};
use burrows_transform::{
    BurrowsWheeler, MoveToFront, MtfReader, MtfWriter, Pipeline, TransformConfig,
};
use log::info;

/// Transform run by a filter binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Framed Burrows-Wheeler transform.
    BurrowsWheeler,
    /// Move-to-Front ranks.
    MoveToFront,
    /// BWT followed by MTF.
    Pipeline,
}

impl Stage {
    /// Build the whole-buffer transform for this stage.
    pub fn transform(self, config: TransformConfig) -> Box<dyn ByteTransform> {
        match self {
            Self::BurrowsWheeler => Box::new(BurrowsWheeler::new(config)),
            Self::MoveToFront => Box::new(MoveToFront),
            Self::Pipeline => Box::new(Pipeline::new(config)),
        }
    }
}

/// Run `stage` over `input`, writing the result to `output`.
///
/// MTF streams byte by byte. The BWT stages need the whole block, so they
/// buffer the input and write nothing until the transform has succeeded.
/// Returns the number of bytes written.
pub fn run<R: Read, W: Write>(
    stage: Stage,
    direction: Direction,
    config: TransformConfig,
    mut input: R,
    mut output: W,
) -> Result<u64> {
    let written = match (stage, direction) {
        (Stage::MoveToFront, Direction::Forward) => {
            let mut encoder = MtfWriter::new(&mut output);
            let n = io::copy(&mut input, &mut encoder)?;
            encoder.finish()?;
            n
        }
        (Stage::MoveToFront, Direction::Inverse) => {
            let mut decoder = MtfReader::new(input);
            io::copy(&mut decoder, &mut output)?
        }
        _ => {
            let mut data = Vec::new();
            input.read_to_end(&mut data)?;

            let transform = stage.transform(config);
            let result = direction.apply(&*transform, &data)?;
            output.write_all(&result)?;
            info!(
                "{} {:?}: {} -> {} bytes",
                transform.name(),
                direction,
                data.len(),
                result.len()
            );
            result.len() as u64
        }
    };

    output.flush()?;
    Ok(written)
}

/// Run `stage` from standard input to standard output.
pub fn run_stdio(stage: Stage, direction: Direction, config: TransformConfig) -> Result<u64> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());
    run(stage, direction, config, stdin.lock(), output)
}
