//! KDC container header

use std::fmt;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Size of the container header; the payload starts right after it.
pub const KDC_HEADER_LEN: usize = 15680;

/// Camera identifier every DC120 capture carries.
pub const DC120_IDENTIFIER: &str = "Kodak DC120 ZOOM Digital Camera";

const IDENTIFIER_OFFSET: usize = 470;
const COMPRESSION_OFFSET: usize = 707;

/// Payload kind announced by the compression flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    /// Scrambled 8-bit sensor mosaic (flag `1`).
    Uncompressed,
    /// Ready-made JPEG stream (flag `7`).
    Jpeg,
    Unknown(u8),
}

impl CompressionMode {
    pub fn flag(self) -> u8 {
        match self {
            CompressionMode::Uncompressed => 1,
            CompressionMode::Jpeg => 7,
            CompressionMode::Unknown(flag) => flag,
        }
    }
}

impl From<u8> for CompressionMode {
    fn from(flag: u8) -> Self {
        match flag {
            1 => CompressionMode::Uncompressed,
            7 => CompressionMode::Jpeg,
            other => CompressionMode::Unknown(other),
        }
    }
}

impl fmt::Display for CompressionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionMode::Uncompressed => write!(f, "uncompressed"),
            CompressionMode::Jpeg => write!(f, "compressed"),
            CompressionMode::Unknown(flag) => write!(f, "unknown (flag {})", flag),
        }
    }
}

/// The two header fields the converters rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdcHeader {
    pub model: String,
    pub compression: CompressionMode,
}

impl KdcHeader {
    /// Header of a DC120 capture with the given payload kind.
    pub fn dc120(compression: CompressionMode) -> Self {
        Self {
            model: DC120_IDENTIFIER.to_string(),
            compression,
        }
    }

    /// Extracts the identifier and compression flag without judging them.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() <= COMPRESSION_OFFSET {
            return Err(ConversionError::TruncatedInput {
                expected: COMPRESSION_OFFSET + 1,
                got: data.len(),
            });
        }

        // NUL-terminated; a missing terminator runs into the flag byte and
        // can never match the expected identifier.
        let field = &data[IDENTIFIER_OFFSET..COMPRESSION_OFFSET];
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());

        Ok(Self {
            model: String::from_utf8_lossy(&field[..end]).into_owned(),
            compression: CompressionMode::from(data[COMPRESSION_OFFSET]),
        })
    }

    /// Checks that this is a DC120 capture carrying the `expected` payload.
    pub fn validate(&self, expected: CompressionMode) -> Result<()> {
        if self.model != DC120_IDENTIFIER {
            return Err(ConversionError::InvalidFormat(format!(
                "not a DC120 .kdc file (camera identifier {:?})",
                self.model
            )));
        }
        if self.compression != expected {
            return Err(ConversionError::InvalidFormat(format!(
                "not a {} .kdc file, payload is {}",
                expected, self.compression
            )));
        }
        Ok(())
    }

    /// Everything after the fixed-size header.
    pub fn payload(data: &[u8]) -> Result<&[u8]> {
        data.get(KDC_HEADER_LEN..).ok_or(ConversionError::TruncatedInput {
            expected: KDC_HEADER_LEN,
            got: data.len(),
        })
    }

    /// Serializes a zero-filled header holding only these two fields.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut header = vec![0u8; KDC_HEADER_LEN];
        let model = self.model.as_bytes();
        // Leave room for the terminator.
        let len = model.len().min(COMPRESSION_OFFSET - IDENTIFIER_OFFSET - 1);
        header[IDENTIFIER_OFFSET..IDENTIFIER_OFFSET + len].copy_from_slice(&model[..len]);
        header[COMPRESSION_OFFSET] = self.compression.flag();
        header
    }
}
