#![deny(warnings)]
#![deny(clippy::all)]

pub mod checksum;

pub use checksum::{crc32, padded_len, Crc32, INITIAL, PAD_BYTE, POLYNOMIAL, WORD_LEN};
