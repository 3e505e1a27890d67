//! Pipeline conversions module
//!
//! Orchestrates the full reconstruction of uncompressed captures and the
//! pass-through of compressed ones.

mod files;
mod kdc_to_bitmap;
mod kdc_to_jpeg;

#[cfg(test)]
mod tests;

pub use kdc_to_bitmap::KdcToBitmapPipeline;
pub use kdc_to_jpeg::{KdcToJpegExtractor, JFIF_PREFIX};
