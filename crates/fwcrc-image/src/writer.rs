use std::fs;
use std::path::{Path, PathBuf};

use crate::blob::encode_checksum;
use crate::error::ImageError;

/// Write the 4-byte checksum blob through a temp file so a failed run
/// never leaves partial output behind.
pub fn write_checksum(path: &Path, value: u32) -> Result<(), ImageError> {
    let tmp_path = temp_path_for(path);

    let result = fs::write(&tmp_path, encode_checksum(value));
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result?;

    finalize_output(&tmp_path, path)?;
    Ok(())
}

fn temp_path_for(output: &Path) -> PathBuf {
    output.with_extension("tmp")
}

fn finalize_output(tmp_path: &Path, output: &Path) -> Result<(), std::io::Error> {
    if output.exists() {
        fs::remove_file(output)?;
    }
    fs::rename(tmp_path, output)
}
