//! Output configuration and pixel stream types

use std::fmt;
use std::str::FromStr;

/// Container the reconstructed image is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Uncompressed 24-bit Windows bitmap, bottom-up BGR (default)
    Bmp,
    /// Top-down RGB8 TIFF, compressed per [`TiffCompression`]
    Tiff,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tif",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bmp" => Ok(OutputFormat::Bmp),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

impl FromStr for TiffCompression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TiffCompression::None),
            "lzw" => Ok(TiffCompression::Lzw),
            "deflate-fast" => Ok(TiffCompression::DeflateFast),
            "deflate" => Ok(TiffCompression::DeflateBalanced),
            "deflate-best" => Ok(TiffCompression::DeflateBest),
            other => Err(format!("unknown TIFF compression '{}'", other)),
        }
    }
}

impl fmt::Display for TiffCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TiffCompression::None => "none",
            TiffCompression::Lzw => "lzw",
            TiffCompression::DeflateFast => "deflate-fast",
            TiffCompression::DeflateBalanced => "deflate",
            TiffCompression::DeflateBest => "deflate-best",
        };
        f.write_str(name)
    }
}

/// Configuration for KDC to bitmap conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Output container
    pub output_format: OutputFormat,
    /// Compression method, TIFF output only
    pub compression: TiffCompression,
    /// Predictor value for compression (2 for horizontal differencing), TIFF output only
    pub predictor: Option<u16>,
    /// Whether to insist on the DC120 sensor geometry before encoding
    pub validate_dimensions: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Bmp,
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    output_format: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            output_format: self.output_format.unwrap_or(default.output_format),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}

/// Gamma-corrected, stretched pixels ready for a bitmap.
///
/// Rows run bottom to top and every pixel is stored as `B, G, R`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelStream {
    /// Width in pixels, after stretching
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// `3 * width * height` bytes, no row padding
    pub data: Vec<u8>,
}

impl PixelStream {
    /// Same pixels, rows top to bottom and channels as `R, G, B`.
    pub fn to_top_down_rgb(&self) -> Vec<u8> {
        let stride = self.width * 3;
        let mut rgb = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(stride).rev() {
            for bgr in row.chunks_exact(3) {
                rgb.extend_from_slice(&[bgr[2], bgr[1], bgr[0]]);
            }
        }
        rgb
    }
}
