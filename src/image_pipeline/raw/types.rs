//! Sensor data types

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Width of the DC120 CCD in samples.
pub const SENSOR_WIDTH: usize = 848;
/// Height of the DC120 CCD in rows.
pub const SENSOR_HEIGHT: usize = 976;
/// Size of the uncompressed sensor payload in bytes.
pub const SENSOR_LEN: usize = SENSOR_WIDTH * SENSOR_HEIGHT;

/// Unrotated single-channel mosaic, one 8-bit sample per CCD cell.
///
/// Even rows hold `G R G R ...`, odd rows `B G B G ...`. Both dimensions
/// are even so the grid always tiles into whole 2x2 blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl SensorGrid {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width < 2 || height < 2 || width % 2 != 0 || height % 2 != 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        if data.len() != width * height {
            return Err(ConversionError::InvalidFormat(format!(
                "sensor grid of {}x{} needs {} samples, got {}",
                width,
                height,
                width * height,
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    /// Builds a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Result<Self> {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.width + col]
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.data[row * self.width..(row + 1) * self.width]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
