//! Output encoding module
//!
//! Gamma correction, the 3:2 horizontal stretch and the file writers for the
//! reconstructed image.

mod gamma;
mod stretch;
mod writer;
mod format_writer;
mod standard_bmp_writer;
mod standard_tiff_writer;
pub mod types;

pub use gamma::{gamma_correct, GAMMA};
pub use stretch::stretch_and_encode;
pub use writer::ImageWriter;
pub use format_writer::FormatWriter;
pub use standard_bmp_writer::{StandardBmpWriter, BMP_HEADER_LEN};
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, OutputFormat, PixelStream, TiffCompression};
