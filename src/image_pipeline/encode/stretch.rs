//! Horizontal 3:2 stretch with gamma correction.

use tracing::debug;

use crate::image_pipeline::debayer::ColorPlanes;
use crate::image_pipeline::encode::gamma::gamma_correct;
use crate::image_pipeline::encode::types::PixelStream;

/// Expands one source column pair `(left, right)` into three output
/// samples: the right sample, the truncated mean, then the left sample.
#[inline]
pub(crate) fn stretch_pair(left: u8, right: u8) -> [u8; 3] {
    [right, ((left as u16 + right as u16) / 2) as u8, left]
}

/// Builds the bottom-up BGR pixel stream of a bitmap from the colour planes.
///
/// Every two source columns become three output columns, so the stream is
/// `3 * width / 2` pixels wide. Each sample goes through [`GAMMA`](super::GAMMA).
pub fn stretch_and_encode(planes: &ColorPlanes) -> PixelStream {
    let src_width = planes.width;
    let width = src_width / 2 * 3;
    let height = planes.height;
    debug!("Stretching {}x{} planes to {}x{}", src_width, height, width, height);

    let mut data = Vec::with_capacity(3 * width * height);
    for k in (0..height).rev() {
        let row = k * src_width;
        for j in (row..row + src_width).step_by(2) {
            let blue = stretch_pair(planes.blue[j], planes.blue[j + 1]);
            let green = stretch_pair(planes.green[j], planes.green[j + 1]);
            let red = stretch_pair(planes.red[j], planes.red[j + 1]);

            for p in 0..3 {
                data.extend_from_slice(&[
                    gamma_correct(blue[p]),
                    gamma_correct(green[p]),
                    gamma_correct(red[p]),
                ]);
            }
        }
    }

    PixelStream { width, height, data }
}
