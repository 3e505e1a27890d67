use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Invalid usage: {0}")]
    UsageError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Invalid KDC file: {0}")]
    InvalidFormat(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Truncated input: expected {expected} bytes, got {got}")]
    TruncatedInput { expected: usize, got: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
