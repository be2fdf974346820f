use std::fmt::Write as _;
use std::io::Write;

use log::{debug, log_enabled, trace, Level};

use crate::alu::AluOp;
use crate::error::{Error, Result};
use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::region::Region;
use crate::register::{Register, Registers};

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
  Active,
  Halted,
}

/// A virtual machine for the LS-8 architecture.
///
/// Programs are copied into memory at address zero with [`Vm::load`] and then
/// driven one instruction at a time with [`Vm::step`], or to completion with
/// [`Vm::run`]. `PRN` output goes to whatever writer the caller hands in.
#[derive(Debug)]
pub struct Vm {
  pc: usize,
  memory: Memory,
  registers: Registers,
  state: State,
  steps: u64,
}

impl Vm {
  /// Create a new, empty virtual machine
  pub fn new() -> Self {
    Self {
      pc: 0,
      memory: Memory::new(),
      registers: Registers::new(),
      state: State::Active,
      steps: 0,
    }
  }

  /// Copy a program image into memory at address zero
  pub fn load<R>(&mut self, region: &R) -> Result<()>
  where
    R: Region,
  {
    let bytes = region.instructions();
    self.memory.load(0, bytes)?;
    debug!("loaded {} bytes", bytes.len());
    Ok(())
  }

  /// Execute a single instruction
  ///
  /// A failed step leaves the machine as it was before the step.
  pub fn step<W>(&mut self, out: &mut W) -> Result<()>
  where
    W: Write,
  {
    if self.state == State::Halted {
      return Err(Error::MachineHalted);
    }
    if log_enabled!(Level::Trace) {
      trace!("{}", self.trace());
    }
    let mut task = Task::new(self, out);
    task.run()
  }

  /// Step until the machine halts
  pub fn run<W>(&mut self, out: &mut W) -> Result<()>
  where
    W: Write,
  {
    while self.state == State::Active {
      self.step(out)?;
    }
    Ok(())
  }

  /// Step until the machine halts, giving up once `limit` instructions have
  /// run in total
  pub fn run_with_limit<W>(&mut self, out: &mut W, limit: u64) -> Result<()>
  where
    W: Write,
  {
    while self.state == State::Active {
      if self.steps >= limit {
        return Err(Error::StepLimitExceeded { limit });
      }
      self.step(out)?;
    }
    Ok(())
  }

  pub fn pc(&self) -> usize {
    self.pc
  }

  pub fn is_halted(&self) -> bool {
    self.state == State::Halted
  }

  pub fn registers(&self) -> &Registers {
    &self.registers
  }

  pub fn memory(&self) -> &Memory {
    &self.memory
  }

  /// Number of instructions executed so far
  pub fn steps(&self) -> u64 {
    self.steps
  }

  /// Render the machine state as `TRACE: PC | IR OP1 OP2 | R0 .. R7`
  pub fn trace(&self) -> String {
    let peek = |address: usize| self.memory.read(address).unwrap_or_default();
    let mut line = format!(
      "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
      self.pc,
      peek(self.pc),
      peek(self.pc + 1),
      peek(self.pc + 2),
    );
    for register in self.registers.iter() {
      let _ = write!(line, " {register:02X}");
    }
    line
  }
}

impl Default for Vm {
  fn default() -> Self {
    Self::new()
  }
}

struct Task<'vm, 'out, W> {
  vm: &'vm mut Vm,
  out: &'out mut W,
}

impl<'vm, 'out, W> Task<'vm, 'out, W>
where
  W: Write,
{
  fn new(vm: &'vm mut Vm, out: &'out mut W) -> Self {
    Self { vm, out }
  }

  /// Operand `n` (zero based) of the instruction at pc
  #[inline]
  fn operand(&self, n: usize) -> Result<u8> {
    self.vm.memory.read(self.vm.pc + 1 + n)
  }

  fn register(&self, index: u8) -> Result<Register> {
    self.vm.registers.get(index as usize)
  }

  // r[a] ← r[a] op r[b]
  fn alu(&mut self, op: AluOp, a: u8, b: u8, pc: usize) -> Result<()> {
    let rb = self.register(b)?;
    let ra = self.register(a)?;
    let value = op.apply(ra, rb, pc)?;
    self.vm.registers.set(a as usize, value)
  }

  fn run(&mut self) -> Result<()> {
    let pc = self.vm.pc;
    let ir = self.vm.memory.read(pc)?;
    let op = Opcode::decode(ir, pc)?;

    // operands are fetched eagerly, but never past the encoded count
    let count = Opcode::operand_count(ir);
    let mut operands = [0u8; 3];
    for (n, slot) in operands.iter_mut().enumerate().take(count) {
      *slot = self.operand(n)?;
    }
    let [a, b, _] = operands;
    trace!("{} {a:#04x} {b:#04x}", op.mnemonic());

    match op {
      Opcode::Ldi => self.vm.registers.set(a as usize, b)?,
      Opcode::Prn => {
        let value = self.register(a)?;
        writeln!(self.out, "{value}")?;
      }
      Opcode::Hlt => {
        debug!("halted at {pc:#04x} after {} steps", self.vm.steps + 1);
        self.vm.state = State::Halted;
      }
      Opcode::Add => self.alu(AluOp::Add, a, b, pc)?,
      Opcode::Sub => self.alu(AluOp::Sub, a, b, pc)?,
      Opcode::Mul => self.alu(AluOp::Mul, a, b, pc)?,
      Opcode::Div => self.alu(AluOp::Div, a, b, pc)?,
    }

    self.vm.pc += Opcode::width(ir);
    self.vm.steps += 1;
    Ok(())
  }
}
