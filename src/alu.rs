use crate::error::{Error, Result};
use crate::register::Register;

/// An arithmetic operation over two register values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
  Add,
  Sub,
  Mul,
  Div,
}

impl AluOp {
  /// Compute `a op b`
  ///
  /// `address` is where the instruction lives, only used to report a
  /// division by zero.
  pub fn apply(self, a: Register, b: Register, address: usize) -> Result<Register> {
    let value = match self {
      AluOp::Add => a.wrapping_add(b),
      AluOp::Sub => a.wrapping_sub(b),
      AluOp::Mul => a.wrapping_mul(b),
      // unsigned, so this is already floor division
      AluOp::Div => a.checked_div(b).ok_or(Error::DivisionByZero { address })?,
    };
    Ok(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add() {
    assert_eq!(AluOp::Add.apply(3, 4, 0).unwrap(), 7);
  }

  #[test]
  fn add_wraps() {
    assert_eq!(AluOp::Add.apply(250, 10, 0).unwrap(), 4);
  }

  #[test]
  fn sub_wraps() {
    assert_eq!(AluOp::Sub.apply(3, 5, 0).unwrap(), 254);
  }

  #[test]
  fn mul() {
    assert_eq!(AluOp::Mul.apply(8, 9, 0).unwrap(), 72);
    assert_eq!(AluOp::Mul.apply(16, 16, 0).unwrap(), 0);
  }

  #[test]
  fn div_floors() {
    assert_eq!(AluOp::Div.apply(7, 2, 0).unwrap(), 3);
    assert_eq!(AluOp::Div.apply(1, 2, 0).unwrap(), 0);
  }

  #[test]
  fn div_by_zero() {
    assert!(matches!(
      AluOp::Div.apply(7, 0, 0x10),
      Err(Error::DivisionByZero { address: 0x10 })
    ));
  }
}
