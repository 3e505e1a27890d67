//! Demosaicing of the DC120 `GRBG` mosaic into full-resolution colour planes

mod dc120_debayer;
pub mod types;

pub use dc120_debayer::Dc120Debayer;
pub use types::ColorPlanes;
