//! Reader for uncompressed Kodak DC120 `.kdc` captures.

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::descramble::descramble;
use crate::image_pipeline::raw::header::{CompressionMode, KdcHeader};
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::{SensorGrid, SENSOR_LEN};

/// Validates the container header and descrambles the sensor payload.
///
/// Compressed captures are rejected; they go through
/// [`KdcToJpegExtractor`](crate::image_pipeline::KdcToJpegExtractor) instead.
pub struct KdcReader;

impl RawImageReader for KdcReader {
    fn read_raw(&self, data: &[u8]) -> Result<SensorGrid> {
        debug!("Decoding KDC container, {} bytes", data.len());

        let header = KdcHeader::parse(data)?;
        header.validate(CompressionMode::Uncompressed)?;
        debug!(model = %header.model, compression = %header.compression, "Header accepted");

        let payload = KdcHeader::payload(data)?;
        if payload.len() > SENSOR_LEN {
            debug!("Ignoring {} bytes after the sensor payload", payload.len() - SENSOR_LEN);
        }

        let grid = descramble(payload)?;
        debug!("Descrambled sensor grid: {}x{}", grid.width(), grid.height());
        Ok(grid)
    }
}
