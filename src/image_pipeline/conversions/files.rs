//! Whole-file input and output shared by the converters.
//!
//! Converters build their complete output in memory first, so a failing
//! input never leaves a file behind.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::{info_span, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};

pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
    let _span = info_span!("read_input_file").entered();
    std::fs::read(path).map_err(|e| ConversionError::InputReadError(format!("{}: {}", path.display(), e)))
}

/// Creates `path` and writes `bytes`; a partially written file is removed.
pub(crate) fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let _span = info_span!("write_output_file", size = bytes.len()).entered();

    let mut file = File::create(path)
        .map_err(|e| ConversionError::OutputWriteError(format!("{}: {}", path.display(), e)))?;

    if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
        drop(file);
        if let Err(remove_err) = std::fs::remove_file(path) {
            warn!("Could not remove partial output {}: {}", path.display(), remove_err);
        }
        return Err(ConversionError::OutputWriteError(format!("{}: {}", path.display(), e)));
    }
    Ok(())
}
