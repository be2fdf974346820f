//! Reads LS-8 program text into a [`Chunk`].
//!
//! A program is a list of lines, each holding at most one byte written in
//! binary. Anything after a `#` is a comment, and blank lines are skipped:
//!
//! ```text
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! ```

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::region::Chunk;

/// Parse program text, failing on the first token that is not a binary byte
pub fn parse(source: &str) -> Result<Chunk> {
  let mut bytes = Vec::new();
  for (index, line) in source.lines().enumerate() {
    let token = line.split('#').next().unwrap_or_default().trim();
    if token.is_empty() {
      continue;
    }
    let byte = u8::from_str_radix(token, 2).map_err(|_| Error::MalformedToken {
      token: token.to_owned(),
      line: index + 1,
    })?;
    bytes.push(byte);
  }
  Ok(bytes.into())
}

/// Read and parse the program at `path`
pub fn load_file(path: impl AsRef<Path>) -> Result<Chunk> {
  let path = path.as_ref();
  let source = fs::read_to_string(path).map_err(|err| match err.kind() {
    io::ErrorKind::NotFound => Error::FileNotFound {
      path: path.to_path_buf(),
    },
    _ => Error::Io(err),
  })?;
  let chunk = parse(&source)?;
  debug!("read {} bytes from {}", chunk.len(), path.display());
  Ok(chunk)
}
