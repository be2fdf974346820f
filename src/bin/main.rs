use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;
use log::{error, info, LevelFilter};

use emulator::loader;
use emulator::vm::Vm;

/// Exit status for a bad command line, clear of every [`emulator::Error`] code
const USAGE_EXIT_CODE: i32 = 9;

#[derive(Parser, Debug)]
#[command(name = "ls8")]
#[command(about = "Run an LS-8 program")]
struct Cli {
  /// Program file, one binary byte per line
  program: PathBuf,

  /// Log the machine state before every instruction
  #[arg(long)]
  trace: bool,

  /// Stop with an error if the program has not halted after this many
  /// instructions
  #[arg(long)]
  max_steps: Option<u64>,
}

fn usage_exit_code(err: &clap::Error) -> i32 {
  match err.kind() {
    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
    _ => USAGE_EXIT_CODE,
  }
}

/// Apply `--trace` on top of whatever `RUST_LOG` asked for
fn with_trace(mut builder: env_logger::Builder, trace: bool) -> env_logger::Builder {
  if trace {
    builder.filter_module("emulator", LevelFilter::Trace);
  }
  builder
}

fn run(cli: &Cli) -> emulator::Result<()> {
  let chunk = loader::load_file(&cli.program)?;
  let mut vm = Vm::new();
  vm.load(&chunk)?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let result = match cli.max_steps {
    Some(limit) => vm.run_with_limit(&mut out, limit),
    None => vm.run(&mut out),
  };
  if let Err(err) = result {
    // the machine fault is the one worth reporting
    let _ = out.flush();
    return Err(err);
  }
  out.flush()?;

  info!("halted after {} instructions", vm.steps());
  Ok(())
}

fn main() {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(err) => {
      let _ = err.print();
      process::exit(usage_exit_code(&err));
    }
  };

  let builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
  with_trace(builder, cli.trace).init();

  if let Err(err) = run(&cli) {
    error!("{err}");
    eprintln!("ls8: {err}");
    process::exit(err.exit_code());
  }
}
