#![deny(warnings)]
#![deny(clippy::all)]

use std::env;

use fwcrc_core::{crc32, padded_len, PAD_BYTE, WORD_LEN};
use fwcrc_image::{decode_checksum, encode_checksum};

const DEFAULT_ITERS: u64 = 5000;
const DEFAULT_MAX_LEN: usize = 4096;
const DEFAULT_SEED: u64 = 0xA5A5_5A5A_1234_5678;

fn main() {
    let args: Vec<String> = env::args().collect();
    let iters = parse_arg(&args, "--iters")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_ITERS);
    let max_len = parse_arg(&args, "--max-len")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_LEN);
    let seed = env::var("FWCRC_FUZZ_SEED")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED);

    let mut rng = XorShift64::new(seed);
    let mut stats = FuzzStats::default();

    for _ in 0..iters {
        let len = (rng.next_u64() as usize) % (max_len + 1);
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        run_case(&mut stats, &mut rng, &data);
    }

    println!(
        "fuzz-lite completed: {} iterations (partial words: {}, appends: {})",
        iters, stats.partial, stats.appends
    );
}

#[derive(Default)]
struct FuzzStats {
    partial: u64,
    appends: u64,
}

fn run_case(stats: &mut FuzzStats, rng: &mut XorShift64, data: &[u8]) {
    let value = crc32(data);

    if crc32(data) != value {
        fail("checksum not deterministic", data);
    }

    if decode_checksum(encode_checksum(value)) != value {
        fail("checksum blob does not round-trip", data);
    }

    if data.len() % WORD_LEN != 0 {
        stats.partial += 1;

        let mut padded = data.to_vec();
        padded.resize(padded_len(data.len()), PAD_BYTE);
        if crc32(&padded) != value {
            fail("explicit padding diverged from internal padding", data);
        }

        stats.appends += 1;
        let mut appended = data.to_vec();
        let byte = rng.next_u64() as u8;
        appended.push(byte);
        if byte == PAD_BYTE {
            if crc32(&appended) != value {
                fail("pad-byte append changed a partial word", data);
            }
        } else if crc32(&appended) == value {
            fail("non-pad append collided", data);
        }
    }
}

fn fail(message: &str, data: &[u8]) -> ! {
    eprintln!("fuzz-lite: {} (len {})", message, data.len());
    std::process::exit(1);
}

fn parse_arg<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|idx| args.get(idx + 1))
        .map(|s| s.as_str())
}

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut offset = 0;
        while offset < buf.len() {
            let next = self.next_u64().to_le_bytes();
            let to_copy = std::cmp::min(next.len(), buf.len() - offset);
            buf[offset..offset + to_copy].copy_from_slice(&next[..to_copy]);
            offset += to_copy;
        }
    }
}
