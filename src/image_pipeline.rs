//! Image processing pipeline module
//!
//! Reads Kodak DC120 `.kdc` captures, rebuilds the colour image from the
//! scrambled sensor mosaic and writes it out as BMP or TIFF. Compressed
//! captures already hold a JPEG stream and are only rewrapped.

pub mod raw;
pub mod debayer;
pub mod encode;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
    PipelineTimings,
    StepTiming,
    Timer,
};

pub use raw::{
    SensorGrid,
    RawImageReader,
    KdcReader,
    KdcHeader,
    CompressionMode,
};

pub use debayer::{
    ColorPlanes,
    Dc120Debayer,
};

pub use encode::{
    OutputFormat,
    TiffCompression,
    ConversionConfig,
    ConversionConfigBuilder,
    PixelStream,
    ImageWriter,
    FormatWriter,
    StandardBmpWriter,
    StandardTiffWriter,
};

pub use conversions::{
    KdcToBitmapPipeline,
    KdcToJpegExtractor,
};
