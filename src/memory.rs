use crate::error::{Error, Result};

/// Number of addressable bytes
pub const MEMORY_SIZE: usize = 256;

/// The machine's byte-addressed RAM
#[derive(Debug, Clone)]
pub struct Memory {
  cells: [u8; MEMORY_SIZE],
}

impl Memory {
  /// Create a zeroed memory
  pub fn new() -> Self {
    Self {
      cells: [0; MEMORY_SIZE],
    }
  }

  pub fn read(&self, address: usize) -> Result<u8> {
    self
      .cells
      .get(address)
      .copied()
      .ok_or(Error::OutOfBounds { address })
  }

  pub fn write(&mut self, address: usize, value: u8) -> Result<()> {
    let cell = self
      .cells
      .get_mut(address)
      .ok_or(Error::OutOfBounds { address })?;
    *cell = value;
    Ok(())
  }

  /// Copy `bytes` into memory starting at `origin`
  ///
  /// Nothing is written if the image does not fit.
  pub fn load(&mut self, origin: usize, bytes: &[u8]) -> Result<()> {
    let end = origin
      .checked_add(bytes.len())
      .filter(|&end| end <= MEMORY_SIZE)
      .ok_or(Error::OutOfBounds {
        address: origin.max(MEMORY_SIZE),
      })?;
    self.cells[origin..end].copy_from_slice(bytes);
    Ok(())
  }

  pub fn as_slice(&self) -> &[u8] {
    &self.cells
  }
}

impl Default for Memory {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_is_zeroed() {
    let memory = Memory::new();
    assert!(memory.as_slice().iter().all(|&b| b == 0));
    assert_eq!(memory.as_slice().len(), MEMORY_SIZE);
  }

  #[test]
  fn write_then_read() {
    let mut memory = Memory::new();
    memory.write(0xFF, 42).unwrap();
    assert_eq!(memory.read(0xFF).unwrap(), 42);
  }

  #[test]
  fn read_out_of_bounds() {
    let memory = Memory::new();
    assert!(matches!(
      memory.read(256),
      Err(Error::OutOfBounds { address: 256 })
    ));
  }

  #[test]
  fn write_out_of_bounds() {
    let mut memory = Memory::new();
    assert!(matches!(
      memory.write(300, 1),
      Err(Error::OutOfBounds { address: 300 })
    ));
  }

  #[test]
  fn load_at_origin() {
    let mut memory = Memory::new();
    memory.load(2, &[1, 2, 3]).unwrap();
    assert_eq!(&memory.as_slice()[..6], &[0, 0, 1, 2, 3, 0]);
  }

  #[test]
  fn load_fills_memory_exactly() {
    let mut memory = Memory::new();
    memory.load(0, &[7; MEMORY_SIZE]).unwrap();
    assert_eq!(memory.read(MEMORY_SIZE - 1).unwrap(), 7);
  }

  #[test]
  fn load_too_large() {
    let mut memory = Memory::new();
    let err = memory.load(0, &[7; MEMORY_SIZE + 1]).unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { address: 256 }));
    // nothing was copied
    assert_eq!(memory.read(0).unwrap(), 0);
  }

  #[test]
  fn load_origin_overflow() {
    let mut memory = Memory::new();
    assert!(matches!(
      memory.load(usize::MAX, &[1]),
      Err(Error::OutOfBounds { address: usize::MAX })
    ));
    assert!(matches!(
      memory.load(MEMORY_SIZE, &[]),
      Ok(())
    ));
    assert!(matches!(
      memory.load(MEMORY_SIZE + 1, &[]),
      Err(Error::OutOfBounds { address: 257 })
    ));
  }
}
