//! Pass-through for compressed captures.
//!
//! A compressed `.kdc` already carries a baseline JPEG of the two-row
//! binned image. Only its framing differs: the container drops the SOI/APP0
//! prefix and stores the stream as byte-swapped 16-bit words.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    conversions::files::{read_input, write_output},
    raw::{CompressionMode, KdcHeader},
};

/// SOI marker followed by a JFIF APP0 segment declaring 100x75 dpi.
#[rustfmt::skip]
pub const JFIF_PREFIX: [u8; 20] = [
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46,
    0x49, 0x46, 0x00, 0x01, 0x02, 0x01, 0x00, 0x64,
    0x00, 0x4B, 0x00, 0x00,
];

/// Marker at the start of the payload that [`JFIF_PREFIX`] replaces.
const PAYLOAD_MARKER_LEN: usize = 2;

/// Extracts the JPEG stream of a compressed DC120 capture.
pub struct KdcToJpegExtractor;

impl KdcToJpegExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Builds the complete JPEG file in memory.
    pub fn rewrap(&self, input_data: &[u8]) -> Result<Vec<u8>> {
        let header = KdcHeader::parse(input_data)?;
        header.validate(CompressionMode::Jpeg)?;

        let payload = KdcHeader::payload(input_data)?;
        let body = payload
            .get(PAYLOAD_MARKER_LEN..)
            .ok_or(ConversionError::TruncatedInput {
                expected: PAYLOAD_MARKER_LEN,
                got: payload.len(),
            })?;

        let mut jpeg = Vec::with_capacity(JFIF_PREFIX.len() + body.len());
        jpeg.extend_from_slice(&JFIF_PREFIX);
        for word in body.chunks_exact(2) {
            jpeg.extend_from_slice(&[word[1], word[0]]);
        }
        if body.len() % 2 == 1 {
            debug!("Dropping unpaired trailing byte");
        }

        Ok(jpeg)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn extract(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        let jpeg = self.rewrap(input_data)?;
        output.write_all(&jpeg)?;
        info!(size = jpeg.len(), "JPEG extracted");
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn extract_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_path: P, output_path: Q) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Extracting JPEG"
        );

        let input_data = read_input(input_path)?;
        let jpeg = self.rewrap(&input_data)?;
        write_output(output_path, &jpeg)?;

        info!(size = jpeg.len(), "JPEG extracted");
        Ok(())
    }
}

impl Default for KdcToJpegExtractor {
    fn default() -> Self {
        Self::new()
    }
}
