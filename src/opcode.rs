use crate::error::{Error, Result};

/// The LS-8 instruction set.
///
/// The two high bits of every opcode byte hold its operand count, so an
/// instruction is always `1 + ((opcode >> 6) & 0b11)` bytes wide.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
  /// Loads an immediate value into a register.
  ///
  /// | Operation      | Semantics/RTL | Assembly     |
  /// |----------------|---------------|--------------|
  /// | Load Immediate | `r[a] ← b`    | `LDI ra, b`  |
  Ldi = 0b1000_0010,

  /// Prints a register as a decimal integer.
  ///
  /// | Operation | Semantics/RTL   | Assembly  |
  /// |-----------|-----------------|-----------|
  /// | Print     | `out ← r[a]`    | `PRN ra`  |
  Prn = 0b0100_0111,

  /// | Operation | Semantics/RTL      | Assembly |
  /// |-----------|--------------------|----------|
  /// | Halt      | `(stop execution)` | `HLT`    |
  Hlt = 0b0000_0001,

  /// | Operation | Semantics/RTL         | Assembly     |
  /// |-----------|-----------------------|--------------|
  /// | Add       | `r[a] ← r[a] + r[b]`  | `ADD ra, rb` |
  Add = 0b1010_0000,

  /// | Operation | Semantics/RTL         | Assembly     |
  /// |-----------|-----------------------|--------------|
  /// | Subtract  | `r[a] ← r[a] - r[b]`  | `SUB ra, rb` |
  Sub = 0b1010_0001,

  /// | Operation | Semantics/RTL         | Assembly     |
  /// |-----------|-----------------------|--------------|
  /// | Multiply  | `r[a] ← r[a] × r[b]`  | `MUL ra, rb` |
  Mul = 0b1010_0010,

  /// Floor division, faults on a zero divisor.
  ///
  /// | Operation | Semantics/RTL         | Assembly     |
  /// |-----------|-----------------------|--------------|
  /// | Divide    | `r[a] ← r[a] ÷ r[b]`  | `DIV ra, rb` |
  Div = 0b1010_0011,
}

impl Opcode {
  /// Number of operand bytes following `byte`, taken from its two high bits
  #[inline]
  pub fn operand_count(byte: u8) -> usize {
    ((byte >> 6) & 0b11) as usize
  }

  /// Total instruction width in bytes for `byte`
  #[inline]
  pub fn width(byte: u8) -> usize {
    1 + Self::operand_count(byte)
  }

  /// Decode the byte fetched from `address`
  pub fn decode(byte: u8, address: usize) -> Result<Self> {
    Self::try_from(byte).map_err(|opcode| Error::UnknownOpcode { opcode, address })
  }

  pub fn mnemonic(self) -> &'static str {
    match self {
      Self::Ldi => "LDI",
      Self::Prn => "PRN",
      Self::Hlt => "HLT",
      Self::Add => "ADD",
      Self::Sub => "SUB",
      Self::Mul => "MUL",
      Self::Div => "DIV",
    }
  }
}

impl TryFrom<u8> for Opcode {
  /// The rejected byte, see [`Opcode::decode`] for a located error
  type Error = u8;

  fn try_from(byte: u8) -> std::result::Result<Self, u8> {
    match byte {
      0b1000_0010 => Ok(Self::Ldi),
      0b0100_0111 => Ok(Self::Prn),
      0b0000_0001 => Ok(Self::Hlt),
      0b1010_0000 => Ok(Self::Add),
      0b1010_0001 => Ok(Self::Sub),
      0b1010_0010 => Ok(Self::Mul),
      0b1010_0011 => Ok(Self::Div),
      _ => Err(byte),
    }
  }
}
