use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use bigfact::Factorial;

use crate::{parse_n, read_n, LogArgs, StatsArgs};

#[derive(Debug, Parser)]
#[command(
  name = "bigfact",
  version,
  about = "Compute the exact decimal value of n!",
  propagate_version = true,
  allow_negative_numbers = true
)]
pub struct BigfactCommand {
  /// The number to take the factorial of; read from stdin when omitted
  #[arg(value_parser = parse_n)]
  n: Option<u64>,
  #[command(flatten)]
  stats_args: StatsArgs,
  #[command(flatten)]
  log_args: LogArgs,
}

impl BigfactCommand {
  pub fn execute() -> Result<()> {
    let command = Self::parse();
    command.log_args.init();
    command.run(io::stdin().lock(), io::stdout().lock())
  }

  /// Compute the factorial, reading `n` from `input` unless it was given on
  /// the command line, and write the result to `output`.
  pub fn run(&self, input: impl Read, mut output: impl Write) -> Result<()> {
    let n = match self.n {
      Some(n) => n,
      None => read_n(input).context("invalid input")?,
    };
    debug!(n, "computing factorial");

    let mut driver = Factorial::new();
    let result = driver.compute(n);
    writeln!(output, "{result}")?;
    output.flush()?;

    self.stats_args.report(driver.stats);
    Ok(())
  }
}
