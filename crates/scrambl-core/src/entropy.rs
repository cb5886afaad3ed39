//! Cryptographically secure randomness.
//!
//! Every random draw in scrambl goes through [`EntropySource`]. A source that
//! cannot deliver reports [`ScramblError::EntropyUnavailable`]; callers must
//! treat that as fatal and never fall back to a weaker generator.

use crate::error::{Result, ScramblError};

/// A source of uniformly distributed random bytes.
pub trait EntropySource {
    /// Fill `buf` entirely with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Check that the source can deliver at all.
    fn probe(&mut self) -> Result<()> {
        let mut byte = [0u8; 1];
        self.fill(&mut byte)
    }
}

/// Operating system CSPRNG via `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::getrandom(buf).map_err(|e| ScramblError::EntropyUnavailable(e.to_string()))
    }
}

/// Draw a 16-bit value from two random bytes, little-endian.
pub(crate) fn next_u16(source: &mut dyn EntropySource) -> Result<u16> {
    let mut bytes = [0u8; 2];
    source.fill(&mut bytes)?;
    Ok(u16::from_le_bytes(bytes))
}
