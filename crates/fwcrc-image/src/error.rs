use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImageError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
