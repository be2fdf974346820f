use crate::error::{Error, Result};

/// The type of a single register in our virtual machine
///
/// Registers are a byte wide, so arithmetic wraps modulo 256.
pub type Register = u8;

/// Number of general purpose registers
pub const REGISTER_COUNT: usize = 8;

/// The register file, `r0` through `r7`
///
/// Every register is general purpose, including `r5`-`r7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers([Register; REGISTER_COUNT]);

impl Registers {
  pub fn new() -> Self {
    Self([0; REGISTER_COUNT])
  }

  pub fn get(&self, index: usize) -> Result<Register> {
    self
      .0
      .get(index)
      .copied()
      .ok_or(Error::InvalidRegister { index })
  }

  pub fn set(&mut self, index: usize, value: Register) -> Result<()> {
    let slot = self
      .0
      .get_mut(index)
      .ok_or(Error::InvalidRegister { index })?;
    *slot = value;
    Ok(())
  }

  pub fn iter(&self) -> impl Iterator<Item = Register> + '_ {
    self.0.iter().copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_is_zeroed() {
    assert!(Registers::new().iter().all(|r| r == 0));
  }

  #[test]
  fn set_then_get() {
    let mut registers = Registers::new();
    registers.set(7, 0xAB).unwrap();
    assert_eq!(registers.get(7).unwrap(), 0xAB);
    assert_eq!(registers.iter().filter(|&r| r != 0).count(), 1);
  }

  #[test]
  fn index_out_of_range() {
    let mut registers = Registers::new();
    assert!(matches!(
      registers.get(8),
      Err(Error::InvalidRegister { index: 8 })
    ));
    assert!(matches!(
      registers.set(200, 1),
      Err(Error::InvalidRegister { index: 200 })
    ));
  }
}
