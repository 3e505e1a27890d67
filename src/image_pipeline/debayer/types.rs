//! Types for debayering operations

/// Three full-resolution colour planes produced by the debayer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPlanes {
    /// Width of each plane in pixels
    pub width: usize,
    /// Height of each plane in pixels
    pub height: usize,
    /// Row-major red samples
    pub red: Vec<u8>,
    /// Row-major green samples
    pub green: Vec<u8>,
    /// Row-major blue samples
    pub blue: Vec<u8>,
}

impl ColorPlanes {
    /// Planes filled with one colour.
    pub fn uniform(width: usize, height: usize, red: u8, green: u8, blue: u8) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            red: vec![red; len],
            green: vec![green; len],
            blue: vec![blue; len],
        }
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}
