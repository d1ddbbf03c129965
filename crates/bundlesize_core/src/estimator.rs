use brotli::CompressorWriter;
use std::io::{self, Write};

/// Estimates how large a buffer becomes once compressed.
///
/// Implementations must be deterministic so reports are comparable across runs.
pub trait SizeEstimator {
    fn estimate(&self, bytes: &[u8]) -> io::Result<u64>;
}

pub const DEFAULT_BROTLI_QUALITY: u32 = 11;
pub const DEFAULT_BROTLI_LGWIN: u32 = 22;

const BUFFER_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy)]
pub struct BrotliEstimator {
    quality: u32,
    lgwin: u32,
}

impl BrotliEstimator {
    /// Quality is clamped to brotli's 0..=11 range.
    pub fn with_quality(quality: u32) -> Self {
        Self { quality: quality.min(11), lgwin: DEFAULT_BROTLI_LGWIN }
    }

    pub fn quality(&self) -> u32 {
        self.quality
    }
}

impl Default for BrotliEstimator {
    fn default() -> Self {
        Self::with_quality(DEFAULT_BROTLI_QUALITY)
    }
}

impl SizeEstimator for BrotliEstimator {
    fn estimate(&self, bytes: &[u8]) -> io::Result<u64> {
        let mut writer = CompressorWriter::new(Vec::new(), BUFFER_SIZE, self.quality, self.lgwin);
        writer.write_all(bytes)?;
        // into_inner finishes the stream
        let compressed = writer.into_inner();
        Ok(compressed.len() as u64)
    }
}
