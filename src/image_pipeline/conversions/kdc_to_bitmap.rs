use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::{
        error::{ConversionError, Result},
        timing::{PipelineTimings, Timer},
    },
    conversions::files::{read_input, write_output},
    debayer::Dc120Debayer,
    encode::{stretch_and_encode, ConversionConfig, FormatWriter, ImageWriter},
    raw::{KdcReader, RawImageReader, SENSOR_HEIGHT, SENSOR_WIDTH},
};

/// Reconstructs an uncompressed capture and writes it as a bitmap.
///
/// Steps: read and descramble, demosaic, stretch with gamma, encode.
pub struct KdcToBitmapPipeline<R: RawImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    debayer: Dc120Debayer,
    config: ConversionConfig,
}

impl KdcToBitmapPipeline<KdcReader, FormatWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: KdcReader,
            writer: FormatWriter,
            debayer: Dc120Debayer::new(),
            config,
        }
    }
}

impl<R: RawImageReader, W: ImageWriter> KdcToBitmapPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            debayer: Dc120Debayer::new(),
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width != SENSOR_WIDTH || height != SENSOR_HEIGHT {
            warn!(
                "Sensor grid {}x{} does not match the DC120 CCD ({}x{})",
                width, height, SENSOR_WIDTH, SENSOR_HEIGHT
            );
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, output).map(|_| ())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert_with_timings(&self, input_data: &[u8], output: &mut dyn Write) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        info!("Starting KDC to {:?} conversion", self.config.output_format);

        let timer = Timer::start("decode_raw");
        let grid = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(input_data)?
        };
        timings.record(timer);

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = grid.width(),
                height = grid.height()
            ).entered();
            self.validate_dimensions(grid.width(), grid.height())?;
        }

        let timer = Timer::start("demosaic");
        let planes = {
            let _span = tracing::info_span!("demosaic").entered();
            self.debayer.process(&grid)
        };
        timings.record(timer);

        let timer = Timer::start("stretch");
        let pixels = {
            let _span = tracing::info_span!("stretch").entered();
            stretch_and_encode(&planes)
        };
        timings.record(timer);

        let timer = Timer::start("encode_image");
        {
            let _span = tracing::info_span!("encode_image").entered();
            self.writer.write_image(&pixels, output, &self.config)?;
        }
        timings.record(timer);

        info!(
            width = pixels.width,
            height = pixels.height,
            elapsed_ms = timings.total_duration().as_secs_f64() * 1000.0,
            "Conversion complete"
        );
        Ok(timings)
    }

    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_path: P, output_path: Q) -> Result<()> {
        self.convert_file_with_timings(input_path, output_path).map(|_| ())
    }

    /// Converts `input_path` into `output_path`.
    ///
    /// The output file is only created once the whole image has been
    /// encoded, so invalid or truncated input never leaves a file behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let timer = Timer::start("read_input_file");
        let input_data = read_input(input_path)?;
        timings.record(timer);

        let mut encoded = Vec::new();
        timings.extend(self.convert_with_timings(&input_data, &mut encoded)?);

        let timer = Timer::start("write_output_file");
        write_output(output_path, &encoded)?;
        timings.record(timer);

        Ok(timings)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
