use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::encode::standard_bmp_writer::StandardBmpWriter;
use crate::image_pipeline::encode::standard_tiff_writer::StandardTiffWriter;
use crate::image_pipeline::encode::types::{ConversionConfig, OutputFormat, PixelStream};
use crate::image_pipeline::encode::writer::ImageWriter;

/// Picks the BMP or TIFF writer from `config.output_format`.
pub struct FormatWriter;

impl ImageWriter for FormatWriter {
    fn write_image(&self, image: &PixelStream, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        match config.output_format {
            OutputFormat::Bmp => StandardBmpWriter.write_image(image, output, config),
            OutputFormat::Tiff => StandardTiffWriter.write_image(image, output, config),
        }
    }
}
