use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::{KdcToBitmapPipeline, KdcToJpegExtractor, JFIF_PREFIX};
use crate::image_pipeline::encode::{
    ConversionConfig, ImageWriter, OutputFormat, PixelStream, BMP_HEADER_LEN, GAMMA,
};
use crate::image_pipeline::raw::{
    scramble, CompressionMode, KdcHeader, RawImageReader, SensorGrid, SENSOR_HEIGHT, SENSOR_WIDTH,
};

const BMP_FILE_LEN: usize = BMP_HEADER_LEN + 3 * 1272 * 976;

struct MockReader {
    should_fail: bool,
    mock_data: Option<SensorGrid>,
}

impl RawImageReader for MockReader {
    fn read_raw(&self, _data: &[u8]) -> Result<SensorGrid> {
        if self.should_fail {
            return Err(ConversionError::InvalidFormat("Mock decode error".to_string()));
        }
        match &self.mock_data {
            Some(grid) => Ok(grid.clone()),
            None => SensorGrid::new(8, 8, vec![0; 64]),
        }
    }
}

struct MockWriter {
    should_fail: bool,
    written_data: Arc<Mutex<Vec<PixelStream>>>,
}

impl ImageWriter for MockWriter {
    fn write_image(&self, image: &PixelStream, _output: &mut dyn Write, _config: &ConversionConfig) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::EncodeError("Mock encode error".to_string()));
        }
        self.written_data.lock().unwrap().push(image.clone());
        Ok(())
    }
}

fn small_grid_config() -> ConversionConfig {
    ConversionConfig::builder().validate_dimensions(false).build()
}

fn kdc_file(grid: &SensorGrid) -> Vec<u8> {
    let mut file = KdcHeader::dc120(CompressionMode::Uncompressed).to_bytes();
    file.extend(scramble(grid).unwrap());
    file
}

fn full_size_grid(f: impl FnMut(usize, usize) -> u8) -> SensorGrid {
    SensorGrid::from_fn(SENSOR_WIDTH, SENSOR_HEIGHT, f).unwrap()
}

#[test]
fn test_successful_conversion() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = KdcToBitmapPipeline::with_custom(reader, writer, small_grid_config());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake kdc data", &mut output);

    assert!(result.is_ok());
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!((written[0].width, written[0].height), (12, 8));
}

#[test]
fn test_reader_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: true, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = KdcToBitmapPipeline::with_custom(reader, writer, small_grid_config());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake kdc data", &mut output);

    assert!(matches!(result, Err(ConversionError::InvalidFormat(_))));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: true, written_data: written };

    let pipeline = KdcToBitmapPipeline::with_custom(reader, writer, small_grid_config());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake kdc data", &mut output);

    assert!(matches!(result, Err(ConversionError::EncodeError(_))));
}

#[test]
fn test_dimension_validation_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = KdcToBitmapPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake kdc data", &mut output);

    assert!(matches!(result, Err(ConversionError::InvalidDimensions(8, 8))));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_timings_cover_every_step() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written };

    let pipeline = KdcToBitmapPipeline::with_custom(reader, writer, small_grid_config());

    let mut output = Cursor::new(Vec::new());
    let timings = pipeline.convert_with_timings(b"fake kdc data", &mut output).unwrap();

    for step in ["decode_raw", "demosaic", "stretch", "encode_image"] {
        assert!(timings.get_step(step).is_some(), "missing step {}", step);
    }
}

#[test]
fn zero_sensor_gives_black_bitmap() {
    let file = kdc_file(&full_size_grid(|_, _| 0));
    let pipeline = KdcToBitmapPipeline::new(ConversionConfig::default());

    let mut output = Vec::new();
    pipeline.convert(&file, &mut output).unwrap();

    assert_eq!(output.len(), BMP_FILE_LEN);
    assert!(output[BMP_HEADER_LEN..].iter().all(|&b| b == GAMMA[0]));
}

#[test]
fn output_length_does_not_depend_on_content() {
    let file = kdc_file(&full_size_grid(|r, c| (r * 31 + c * 17) as u8));
    let pipeline = KdcToBitmapPipeline::new(ConversionConfig::default());

    let mut output = Vec::new();
    pipeline.convert(&file, &mut output).unwrap();
    assert_eq!(output.len(), BMP_FILE_LEN);
}

#[test]
fn flat_colour_survives_the_whole_pipeline() {
    let grid = full_size_grid(|r, c| match (r % 2, c % 2) {
        (0, 1) => 180,
        (1, 0) => 20,
        _ => 90,
    });
    let pipeline = KdcToBitmapPipeline::new(ConversionConfig::default());

    let mut output = Vec::new();
    pipeline.convert(&kdc_file(&grid), &mut output).unwrap();

    let expected = [GAMMA[20], GAMMA[90], GAMMA[180]];
    assert!(output[BMP_HEADER_LEN..].chunks_exact(3).all(|px| px == expected));
}

#[test]
fn convert_file_writes_bitmap() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("image.kdc");
    let output = dir.path().join("image.bmp");
    std::fs::write(&input, kdc_file(&full_size_grid(|r, _| r as u8))).unwrap();

    let pipeline = KdcToBitmapPipeline::new(ConversionConfig::default());
    let timings = pipeline.convert_file_with_timings(&input, &output).unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(written.len(), BMP_FILE_LEN);
    assert_eq!(&written[..2], b"BM");
    assert!(timings.get_step("read_input_file").is_some());
    assert!(timings.get_step("write_output_file").is_some());
}

#[test]
fn convert_file_writes_tiff() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("image.kdc");
    let output = dir.path().join("image.tif");
    std::fs::write(&input, kdc_file(&full_size_grid(|_, c| c as u8))).unwrap();

    let config = ConversionConfig::builder().output_format(OutputFormat::Tiff).build();
    KdcToBitmapPipeline::new(config).convert_file(&input, &output).unwrap();

    let written = std::fs::read(&output).unwrap();
    assert!(written.starts_with(b"II*\0") || written.starts_with(b"MM\0*"));
}

#[test]
fn wrong_camera_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("other.kdc");
    let output = dir.path().join("other.bmp");

    let mut file = KdcHeader {
        model: "Kodak DC50 ZOOM Digital Camera".to_string(),
        compression: CompressionMode::Uncompressed,
    }
    .to_bytes();
    file.extend(scramble(&full_size_grid(|_, _| 1)).unwrap());
    std::fs::write(&input, file).unwrap();

    let result = KdcToBitmapPipeline::new(ConversionConfig::default()).convert_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::InvalidFormat(_))));
    assert!(!output.exists());
}

#[test]
fn truncated_payload_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("short.kdc");
    let output = dir.path().join("short.bmp");

    let mut file = kdc_file(&full_size_grid(|_, _| 5));
    file.truncate(file.len() - SENSOR_WIDTH);
    std::fs::write(&input, file).unwrap();

    let result = KdcToBitmapPipeline::new(ConversionConfig::default()).convert_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::TruncatedInput { .. })));
    assert!(!output.exists());
}

#[test]
fn compressed_capture_leaves_no_bitmap() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("jpeg.kdc");
    let output = dir.path().join("jpeg.bmp");

    let mut file = KdcHeader::dc120(CompressionMode::Jpeg).to_bytes();
    file.extend_from_slice(&[0xD8, 0xFF, 0xE0, 0xFF]);
    std::fs::write(&input, file).unwrap();

    let result = KdcToBitmapPipeline::new(ConversionConfig::default()).convert_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::InvalidFormat(_))));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("none.bmp");

    let result = KdcToBitmapPipeline::new(ConversionConfig::default())
        .convert_file(dir.path().join("none.kdc"), &output);

    assert!(matches!(result, Err(ConversionError::InputReadError(_))));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("image.kdc");
    std::fs::write(&input, kdc_file(&full_size_grid(|_, _| 3))).unwrap();

    let output = dir.path().join("missing-dir").join("image.bmp");
    let result = KdcToBitmapPipeline::new(ConversionConfig::default()).convert_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::OutputWriteError(_))));
}

#[test]
fn extract_file_writes_jpeg() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("small.kdc");
    let output = dir.path().join("small.jpg");

    let mut file = KdcHeader::dc120(CompressionMode::Jpeg).to_bytes();
    file.extend_from_slice(&[0xD8, 0xFF, 0xDB, 0xFF, 0xD9, 0xFF]);
    std::fs::write(&input, file).unwrap();

    KdcToJpegExtractor::new().extract_file(&input, &output).unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(&written[..JFIF_PREFIX.len()], &JFIF_PREFIX);
    assert_eq!(&written[JFIF_PREFIX.len()..], &[0xFF, 0xDB, 0xFF, 0xD9]);
}

#[test]
fn extract_file_rejects_uncompressed_capture() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("raw.kdc");
    let output = dir.path().join("raw.jpg");
    std::fs::write(&input, kdc_file(&full_size_grid(|_, _| 0))).unwrap();

    let result = KdcToJpegExtractor::new().extract_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::InvalidFormat(_))));
    assert!(!output.exists());
}
