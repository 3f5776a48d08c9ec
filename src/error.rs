//! Local failure codes
//!
//! None of these are fatal. The controller reports them to its caller
//! and keeps servicing subsequent commands.

use core::fmt;

/// Pixel index outside the configured buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub index: usize,
    pub pixel_count: usize,
}

/// Requested pixel count does not fit the buffer capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferExhausted {
    pub requested: usize,
    pub capacity: usize,
}

/// Error returned by strip configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Arguments do not hold a single full 3-byte entry
    Malformed,
    /// Every strip slot is already taken; `configured` entries were applied
    ///
    /// `buffer` is set when the entries that did fit could not be held by
    /// the pixel buffer either, which is then empty.
    TooManyStrips {
        capacity: usize,
        configured: usize,
        buffer: Option<BufferExhausted>,
    },
    /// Strips were registered but the buffer could not hold them
    BufferExhausted(BufferExhausted),
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pixel {} is out of range ({} pixels configured)",
            self.index, self.pixel_count
        )
    }
}

impl fmt::Display for BufferExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot hold {} pixels (capacity {})",
            self.requested, self.capacity
        )
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Malformed => write!(f, "config needs at least one 3-byte entry"),
            ConfigError::TooManyStrips {
                capacity,
                configured,
                buffer,
            } => {
                write!(
                    f,
                    "strip slots exhausted ({capacity} max), {configured} entries applied"
                )?;
                if let Some(e) = buffer {
                    write!(f, ", pixel buffer: {e}")?;
                }
                Ok(())
            }
            ConfigError::BufferExhausted(e) => write!(f, "pixel buffer: {e}"),
        }
    }
}

impl core::error::Error for OutOfRange {}
impl core::error::Error for BufferExhausted {}
impl core::error::Error for ConfigError {}

impl From<BufferExhausted> for ConfigError {
    fn from(e: BufferExhausted) -> Self {
        ConfigError::BufferExhausted(e)
    }
}
