//! CRLF to LF normalization.
//!
//! Windows line endings (`\r\n`) become `\n`. A carriage return that is not
//! immediately followed by a line feed is kept, including one at the very
//! end of the input.

use std::io::{self, BufReader, Read, Write};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Incremental CRLF normalizer.
///
/// A trailing `\r` in one chunk is held back until the next chunk (or
/// [`finish`](Self::finish)) shows whether it precedes a `\n`.
#[derive(Debug, Default)]
pub struct CrlfNormalizer {
    pending_cr: bool,
    dropped: usize,
}

impl CrlfNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `chunk`, appending the result to `out`.
    pub fn feed(&mut self, chunk: &[u8], out: &mut Vec<u8>) {
        out.reserve(chunk.len() + 1);
        for &byte in chunk {
            if self.pending_cr {
                self.pending_cr = false;
                if byte == LF {
                    self.dropped += 1;
                } else {
                    out.push(CR);
                }
            }
            if byte == CR {
                self.pending_cr = true;
            } else {
                out.push(byte);
            }
        }
    }

    /// Flush a held-back `\r`, if any.
    pub fn finish(&mut self, out: &mut Vec<u8>) {
        if self.pending_cr {
            self.pending_cr = false;
            out.push(CR);
        }
    }

    /// Number of carriage returns removed so far.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Normalize an in-memory buffer.
pub fn normalize_bytes(input: &[u8]) -> Vec<u8> {
    let mut normalizer = CrlfNormalizer::new();
    let mut out = Vec::with_capacity(input.len());
    normalizer.feed(input, &mut out);
    normalizer.finish(&mut out);
    out
}

/// Copy `reader` to `writer`, normalizing CRLF to LF.
///
/// Returns the number of bytes written.
pub fn normalize_line_endings<R: Read, W: Write>(reader: R, mut writer: W) -> io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut normalizer = CrlfNormalizer::new();
    let mut buf = [0u8; 8192];
    let mut out = Vec::with_capacity(buf.len() + 1);
    let mut written = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        out.clear();
        normalizer.feed(&buf[..n], &mut out);
        writer.write_all(&out)?;
        written += out.len() as u64;
    }

    out.clear();
    normalizer.finish(&mut out);
    writer.write_all(&out)?;
    written += out.len() as u64;
    writer.flush()?;

    Ok(written)
}
