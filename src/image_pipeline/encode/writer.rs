use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::encode::types::{ConversionConfig, PixelStream};

pub trait ImageWriter {
    fn write_image(&self, image: &PixelStream, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
