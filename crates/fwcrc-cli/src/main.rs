#![deny(warnings)]
#![deny(clippy::all)]

use std::path::{Path, PathBuf};

use clap::Parser;
use fwcrc_image::{checksum_image, ImageError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CLI: i32 = 2;
const EXIT_INPUT: i32 = 3;
const EXIT_IO: i32 = 4;

#[derive(Parser, Debug)]
#[command(
    name = "fwcrc",
    version,
    about = "Checksum a firmware image with the STM32 hardware CRC algorithm"
)]
struct Cli {
    /// Firmware image to checksum
    input: PathBuf,
    /// Destination file for the 4-byte checksum value
    output: PathBuf,
}

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return EXIT_CLI;
        }
    };

    match cmd_checksum(&cli.input, &cli.output) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            report_error(&err);
            map_exit_code(&err)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn report_error(err: &ImageError) {
    error!(error = %err, "checksum failed");
    eprintln!("error: {err}");
}

fn map_exit_code(err: &ImageError) -> i32 {
    match err {
        ImageError::InputNotFound(_) => EXIT_INPUT,
        ImageError::Io(_) => EXIT_IO,
        _ => EXIT_IO,
    }
}

fn cmd_checksum(input: &Path, output: &Path) -> Result<(), ImageError> {
    info!(
        input = %input.display(),
        output = %output.display(),
        "checksumming image"
    );

    let report = checksum_image(input, output)?;

    info!(
        image_len = report.image_len,
        padded_len = report.padded_len,
        "checksum written"
    );

    println!(
        "Checksum: 0x{value:08X} (Size: {size} bytes)",
        value = report.value,
        size = report.padded_len
    );

    Ok(())
}
