use std::fs;
use std::path::Path;

use crate::error::ImageError;

/// Read a firmware image fully into memory. The existence check runs
/// before any read so a missing input is reported with its path.
pub fn load_image(path: &Path) -> Result<Vec<u8>, ImageError> {
    if !path.exists() {
        return Err(ImageError::InputNotFound(path.to_path_buf()));
    }

    Ok(fs::read(path)?)
}
