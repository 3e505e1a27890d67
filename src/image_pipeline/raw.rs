//! KDC reading module
//!
//! Parses the DC120 container header and turns the scrambled sensor payload
//! into an unrotated mosaic.

mod reader;
mod kdc_reader;
mod header;
mod descramble;
pub mod offsets;
pub mod types;

pub use reader::RawImageReader;
pub use kdc_reader::KdcReader;
pub use header::{KdcHeader, CompressionMode, DC120_IDENTIFIER, KDC_HEADER_LEN};
pub use descramble::{descramble, scramble};
pub use types::{SensorGrid, SENSOR_HEIGHT, SENSOR_LEN, SENSOR_WIDTH};
