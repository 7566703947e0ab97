pub const CHECKSUM_LEN: usize = 4;

/// In-memory layout expected when the value is embedded into the target's
/// address space: least significant byte first.
pub fn encode_checksum(value: u32) -> [u8; CHECKSUM_LEN] {
    value.to_le_bytes()
}

pub fn decode_checksum(bytes: [u8; CHECKSUM_LEN]) -> u32 {
    u32::from_le_bytes(bytes)
}
