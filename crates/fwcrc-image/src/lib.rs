#![deny(warnings)]
#![deny(clippy::all)]

pub mod blob;
pub mod error;
pub mod loader;
pub mod writer;

pub use blob::{decode_checksum, encode_checksum, CHECKSUM_LEN};
pub use error::ImageError;
pub use loader::load_image;
pub use writer::write_checksum;

use std::path::Path;

use fwcrc_core::{crc32, padded_len};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumReport {
    pub value: u32,
    pub image_len: usize,
    pub padded_len: usize,
}

/// Load a firmware image, checksum it, and write the 4-byte result blob.
pub fn checksum_image(input: &Path, output: &Path) -> Result<ChecksumReport, ImageError> {
    let image = load_image(input)?;
    let value = crc32(&image);
    write_checksum(output, value)?;

    Ok(ChecksumReport {
        value,
        image_len: image.len(),
        padded_len: padded_len(image.len()),
    })
}
