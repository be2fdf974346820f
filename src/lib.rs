//! Bare-bones implementation of the LS-8, an 8-bit toy machine with 256 bytes
//! of memory and eight registers.
//!
//! Programs are text files holding one binary byte per line (see [`loader`]),
//! which are loaded at address zero and run until `HLT`.

pub mod alu;
pub mod error;
pub mod loader;
pub mod memory;
pub mod opcode;
pub mod region;
pub mod register;
pub mod vm;

pub use error::{Error, Result};
