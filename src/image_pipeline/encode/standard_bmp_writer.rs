use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::encode::types::{ConversionConfig, PixelStream};
use crate::image_pipeline::encode::writer::ImageWriter;

/// `BITMAPFILEHEADER` plus `BITMAPINFOHEADER`.
pub const BMP_HEADER_LEN: usize = 54;
const INFO_HEADER_LEN: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;
const BI_RGB: u32 = 0;

/// Writes a [`PixelStream`] as an uncompressed 24-bit bottom-up bitmap.
pub struct StandardBmpWriter;

impl StandardBmpWriter {
    /// Bytes per stored row, padded to a multiple of four.
    pub fn row_stride(width: usize) -> usize {
        (width * 3 + 3) & !3
    }

    pub fn header(width: usize, height: usize) -> Result<Vec<u8>> {
        let image_size = Self::row_stride(width) * height;
        let file_size = BMP_HEADER_LEN + image_size;

        let to_u32 = |v: usize| u32::try_from(v).map_err(|_| ConversionError::InvalidDimensions(width, height));
        let to_i32 = |v: usize| i32::try_from(v).map_err(|_| ConversionError::InvalidDimensions(width, height));

        let mut header = Vec::with_capacity(BMP_HEADER_LEN);
        header.write_all(b"BM")?;
        header.write_u32::<LittleEndian>(to_u32(file_size)?)?;
        header.write_u32::<LittleEndian>(0)?; // reserved
        header.write_u32::<LittleEndian>(BMP_HEADER_LEN as u32)?;

        header.write_u32::<LittleEndian>(INFO_HEADER_LEN)?;
        header.write_i32::<LittleEndian>(to_i32(width)?)?;
        // Positive height: rows are stored bottom-up.
        header.write_i32::<LittleEndian>(to_i32(height)?)?;
        header.write_u16::<LittleEndian>(1)?; // planes
        header.write_u16::<LittleEndian>(BITS_PER_PIXEL)?;
        header.write_u32::<LittleEndian>(BI_RGB)?;
        header.write_u32::<LittleEndian>(to_u32(image_size)?)?;
        header.write_i32::<LittleEndian>(0)?; // horizontal pixels per metre
        header.write_i32::<LittleEndian>(0)?; // vertical pixels per metre
        header.write_u32::<LittleEndian>(0)?; // palette colours
        header.write_u32::<LittleEndian>(0)?; // important colours

        debug_assert_eq!(header.len(), BMP_HEADER_LEN);
        Ok(header)
    }
}

impl ImageWriter for StandardBmpWriter {
    fn write_image(&self, image: &PixelStream, output: &mut dyn Write, _config: &ConversionConfig) -> Result<()> {
        debug!("Encoding BMP image: {}x{}", image.width, image.height);

        let row_len = image.width * 3;
        if image.data.len() != row_len * image.height {
            return Err(ConversionError::EncodeError(format!(
                "pixel stream holds {} bytes, {}x{} needs {}",
                image.data.len(),
                image.width,
                image.height,
                row_len * image.height
            )));
        }

        let stride = Self::row_stride(image.width);
        let mut buffer = Self::header(image.width, image.height)?;
        buffer.reserve(stride * image.height);

        for row in image.data.chunks_exact(row_len) {
            buffer.extend_from_slice(row);
            buffer.resize(buffer.len() + stride - row_len, 0);
        }

        output.write_all(&buffer)?;

        debug!("BMP encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, LittleEndian};

    #[test]
    fn header_for_dc120_geometry() {
        let header = StandardBmpWriter::header(1272, 976).unwrap();
        let pixels = 3 * 1272 * 976;

        assert_eq!(header.len(), BMP_HEADER_LEN);
        assert_eq!(&header[0..2], b"BM");
        assert_eq!(LittleEndian::read_u32(&header[2..6]) as usize, BMP_HEADER_LEN + pixels);
        assert_eq!(LittleEndian::read_u32(&header[10..14]), 54);
        assert_eq!(LittleEndian::read_u32(&header[14..18]), 40);
        assert_eq!(LittleEndian::read_i32(&header[18..22]), 1272);
        assert_eq!(LittleEndian::read_i32(&header[22..26]), 976);
        assert_eq!(LittleEndian::read_u16(&header[26..28]), 1);
        assert_eq!(LittleEndian::read_u16(&header[28..30]), 24);
        assert_eq!(LittleEndian::read_u32(&header[30..34]), 0);
        assert_eq!(LittleEndian::read_u32(&header[34..38]) as usize, pixels);
        assert!(header[38..].iter().all(|&b| b == 0));
    }

    #[test]
    fn dc120_rows_need_no_padding() {
        assert_eq!(StandardBmpWriter::row_stride(1272), 1272 * 3);
    }

    #[test]
    fn writes_header_then_pixels() {
        let image = PixelStream {
            width: 4,
            height: 2,
            data: (0..24).collect(),
        };
        let mut output = Vec::new();
        StandardBmpWriter
            .write_image(&image, &mut output, &ConversionConfig::default())
            .unwrap();

        assert_eq!(output.len(), BMP_HEADER_LEN + 24);
        assert_eq!(&output[BMP_HEADER_LEN..], &image.data[..]);
    }

    #[test]
    fn odd_widths_are_padded() {
        let image = PixelStream {
            width: 3,
            height: 2,
            data: vec![7; 18],
        };
        let mut output = Vec::new();
        StandardBmpWriter
            .write_image(&image, &mut output, &ConversionConfig::default())
            .unwrap();

        assert_eq!(output.len(), BMP_HEADER_LEN + 2 * 12);
        let rows = &output[BMP_HEADER_LEN..];
        assert_eq!(&rows[9..12], &[0, 0, 0]);
        assert_eq!(&rows[12..21], &[7; 9]);
    }

    #[test]
    fn short_stream_is_rejected() {
        let image = PixelStream {
            width: 4,
            height: 2,
            data: vec![0; 10],
        };
        let mut output = Vec::new();
        let result = StandardBmpWriter.write_image(&image, &mut output, &ConversionConfig::default());
        assert!(matches!(result, Err(ConversionError::EncodeError(_))));
        assert!(output.is_empty());
    }
}
