use std::io;
use std::path::PathBuf;

/// An error that occurred while loading or executing a program
///
/// Every variant is fatal, the machine never resumes after one.
#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("invalid number '{token}' on line {line}")]
  MalformedToken { token: String, line: usize },

  #[error("file not found: {}", .path.display())]
  FileNotFound { path: PathBuf },

  #[error("unknown instruction {opcode:#010b} at address {address:#04x}")]
  UnknownOpcode { opcode: u8, address: usize },

  #[error("memory access out of bounds: address {address:#x}")]
  OutOfBounds { address: usize },

  #[error("register index out of bounds: r{index}")]
  InvalidRegister { index: usize },

  #[error("division by zero at address {address:#04x}")]
  DivisionByZero { address: usize },

  #[error("program did not halt within {limit} steps")]
  StepLimitExceeded { limit: u64 },

  #[error("machine is halted")]
  MachineHalted,

  #[error("i/o error: {0}")]
  Io(#[from] io::Error),
}

impl Error {
  /// Process exit status reported for this error
  pub fn exit_code(&self) -> i32 {
    match self {
      Error::MalformedToken { .. } => 1,
      Error::FileNotFound { .. } => 2,
      Error::UnknownOpcode { .. } => 3,
      Error::OutOfBounds { .. } | Error::InvalidRegister { .. } => 4,
      Error::DivisionByZero { .. } => 5,
      Error::StepLimitExceeded { .. } => 6,
      Error::MachineHalted => 7,
      Error::Io(_) => 8,
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;
