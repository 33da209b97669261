//! Gzip compression of the stored byte image.
//!
//! The format is internal to the application. Gzip is kept because it adds a
//! magic number and a CRC, so random or truncated files fail loudly here
//! instead of reaching the decoder stages.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Read, Write};

use crate::error::{InknoteError, Result};

pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(bytes).map_err(InknoteError::Io)?;
    enc.finish().map_err(InknoteError::Io)
}

pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    // An empty input has no gzip header at all.
    if bytes.is_empty() {
        return Err(InknoteError::Decompression(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "empty input is not a gzip stream",
        )));
    }

    let mut out = Vec::new();
    GzDecoder::new(bytes)
        .read_to_end(&mut out)
        .map_err(InknoteError::Decompression)?;
    Ok(out)
}
