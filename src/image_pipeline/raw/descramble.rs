//! Undoing the per-row rotation of uncompressed captures.

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::offsets::row_offset;
use crate::image_pipeline::raw::types::{SensorGrid, SENSOR_HEIGHT, SENSOR_LEN, SENSOR_WIDTH};

/// Rebuilds the sensor mosaic from a scrambled payload.
///
/// The byte stored at column `j` of row `k` belongs at column
/// `(j - ROW_OFFSETS[k]) mod 848`. The payload must hold at least
/// [`SENSOR_LEN`] bytes; anything after that is ignored.
pub fn descramble(payload: &[u8]) -> Result<SensorGrid> {
    if payload.len() < SENSOR_LEN {
        return Err(ConversionError::TruncatedInput {
            expected: SENSOR_LEN,
            got: payload.len(),
        });
    }

    let mut data = vec![0u8; SENSOR_LEN];
    for (row, (stored, dst)) in payload
        .chunks_exact(SENSOR_WIDTH)
        .zip(data.chunks_exact_mut(SENSOR_WIDTH))
        .enumerate()
    {
        dst.copy_from_slice(stored);
        // dst[c] = stored[(c + offset) mod width]
        dst.rotate_left(row_offset(row));
    }

    SensorGrid::new(SENSOR_WIDTH, SENSOR_HEIGHT, data)
}

/// Applies the camera's rotation to a full-size grid, producing the payload
/// layout found in a `.kdc` file.
pub fn scramble(grid: &SensorGrid) -> Result<Vec<u8>> {
    if grid.width() != SENSOR_WIDTH || grid.height() != SENSOR_HEIGHT {
        return Err(ConversionError::InvalidDimensions(grid.width(), grid.height()));
    }

    let mut payload = grid.data().to_vec();
    for (row, stored) in payload.chunks_exact_mut(SENSOR_WIDTH).enumerate() {
        stored.rotate_right(row_offset(row));
    }
    Ok(payload)
}
