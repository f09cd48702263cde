//! Rotating XOR checksum over a byte stream.

use std::io::{self, BufReader, Read};

/// Fold one byte into the checksum accumulator.
#[inline]
pub fn fold_byte(acc: u32, byte: u8) -> u32 {
    acc.rotate_left(1) ^ u32::from(byte)
}

/// Checksum of an in-memory byte slice.
pub fn checksum_bytes(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0, |acc, &b| fold_byte(acc, b))
}

/// Checksum of everything `reader` yields, in stream order.
///
/// For each byte the accumulator is rotated left by one bit and the byte
/// is XORed in. An empty stream yields 0.
pub fn checksum<R: Read>(reader: R) -> io::Result<u32> {
    let mut reader = BufReader::new(reader);
    let mut buf = [0u8; 8192];
    let mut acc = 0u32;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(acc),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        acc = buf[..n].iter().fold(acc, |acc, &b| fold_byte(acc, b));
    }
}
