use tracing::{debug, info};

use crate::image_pipeline::debayer::types::ColorPlanes;
use crate::image_pipeline::raw::SensorGrid;

/// Demosaicer matching the DC120 reference converter bit for bit.
///
/// Every plane is first filled by replicating the one sample of its colour
/// found in each 2x2 block. Interior cells are then refined by averaging
/// same-colour neighbours. The two outermost rows and columns on every side
/// keep their replicated value, so no neighbour lookup leaves the grid.
///
/// All averages use truncating integer division.
pub struct Dc120Debayer;

impl Dc120Debayer {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, grid: &SensorGrid) -> ColorPlanes {
        let width = grid.width();
        let height = grid.height();
        info!("Starting debayering for sensor grid {}x{}", width, height);

        let mut planes = ColorPlanes::uniform(width, height, 0, 0, 0);

        replicate(grid, &mut planes);
        debug!("Replication pass done");

        refine_red(grid, &mut planes);
        refine_green(grid, &mut planes);
        refine_blue(grid, &mut planes);
        debug!("Refinement passes done");

        planes
    }
}

impl Default for Dc120Debayer {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn avg2(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}

#[inline]
fn avg4(a: u8, b: u8, c: u8, d: u8) -> u8 {
    ((a as u16 + b as u16 + c as u16 + d as u16) / 4) as u8
}

/// Coarse fill, block by block:
///
/// ```text
///   G R    red   <- R for all four cells
///   B G    green <- top G for the top row, bottom G for the bottom row
///          blue  <- B for all four cells
/// ```
fn replicate(grid: &SensorGrid, planes: &mut ColorPlanes) {
    let width = grid.width();

    for k in (0..grid.height()).step_by(2) {
        for j in (0..width).step_by(2) {
            let r = grid.get(k, j + 1);
            let b = grid.get(k + 1, j);
            let g_top = grid.get(k, j);
            let g_bottom = grid.get(k + 1, j + 1);

            for (row, g) in [(k, g_top), (k + 1, g_bottom)] {
                let i = row * width + j;
                planes.red[i..i + 2].fill(r);
                planes.green[i..i + 2].fill(g);
                planes.blue[i..i + 2].fill(b);
            }
        }
    }
}

/// Each R site fills the cell to its left, the one below and the diagonal
/// between them from itself and the R sites two cells away.
fn refine_red(grid: &SensorGrid, planes: &mut ColorPlanes) {
    let (width, height) = (grid.width(), grid.height());

    for k in (2..height - 2).step_by(2) {
        for j in (3..width - 2).step_by(2) {
            let r = grid.get(k, j);
            let rl = grid.get(k, j - 2);
            let rb = grid.get(k + 2, j);
            let rc = grid.get(k + 2, j - 2);

            planes.red[k * width + j - 1] = avg2(r, rl);
            planes.red[(k + 1) * width + j] = avg2(r, rb);
            planes.red[(k + 1) * width + j - 1] = avg4(r, rl, rb, rc);
        }
    }
}

/// Every R and B site takes the mean of its four orthogonal G neighbours.
fn refine_green(grid: &SensorGrid, planes: &mut ColorPlanes) {
    let (width, height) = (grid.width(), grid.height());

    let cross = |k: usize, j: usize| {
        avg4(
            grid.get(k, j - 1),
            grid.get(k, j + 1),
            grid.get(k - 1, j),
            grid.get(k + 1, j),
        )
    };

    // R sites
    for k in (2..height - 2).step_by(2) {
        for j in (3..width - 2).step_by(2) {
            planes.green[k * width + j] = cross(k, j);
        }
    }

    // B sites
    for k in (3..height - 2).step_by(2) {
        for j in (2..width - 2).step_by(2) {
            planes.green[k * width + j] = cross(k, j);
        }
    }
}

/// Mirror image of [`refine_red`]: each B site fills the cell to its right,
/// the one above and the diagonal between them.
fn refine_blue(grid: &SensorGrid, planes: &mut ColorPlanes) {
    let (width, height) = (grid.width(), grid.height());

    for k in (3..height - 2).step_by(2) {
        for j in (2..width - 2).step_by(2) {
            let b = grid.get(k, j);
            let br = grid.get(k, j + 2);
            let bt = grid.get(k - 2, j);
            let bc = grid.get(k - 2, j + 2);

            planes.blue[k * width + j + 1] = avg2(b, br);
            planes.blue[(k - 1) * width + j] = avg2(b, bt);
            planes.blue[(k - 1) * width + j + 1] = avg4(b, br, bt, bc);
        }
    }
}
