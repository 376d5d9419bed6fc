use std::{
  io::{self, Read},
  num::IntErrorKind,
};

use clap::{ArgAction, Args};
use thiserror::Error;
use tracing::Level;

use bigfact::stats::Stats;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
  #[error("empty input; expected a nonnegative integer")]
  Empty,
  #[error("expected a nonnegative integer; found `{0}`")]
  NotANumber(String),
  #[error("`{0}` is negative; factorial is only defined for nonnegative integers")]
  Negative(String),
  #[error("`{0}` is too large")]
  TooLarge(String),
  #[error("expected a single integer; found extra input `{0}`")]
  ExtraInput(String),
}

/// Parse a single nonnegative integer token. `-0` is zero.
pub fn parse_n(token: &str) -> Result<u64, InputError> {
  match token.strip_prefix('-') {
    Some(digits) if is_integer(digits) => {
      if digits.bytes().all(|b| b == b'0') {
        Ok(0)
      } else {
        Err(InputError::Negative(token.to_owned()))
      }
    }
    _ => token.parse::<u64>().map_err(|err| match err.kind() {
      IntErrorKind::Empty => InputError::Empty,
      IntErrorKind::PosOverflow => InputError::TooLarge(token.to_owned()),
      _ => InputError::NotANumber(token.to_owned()),
    }),
  }
}

fn is_integer(digits: &str) -> bool {
  !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse the whole input, which must hold exactly one integer token.
pub fn parse_input(input: &str) -> Result<u64, InputError> {
  let mut tokens = input.split_whitespace();
  let n = parse_n(tokens.next().ok_or(InputError::Empty)?)?;
  if let Some(extra) = tokens.next() {
    return Err(InputError::ExtraInput(extra.to_owned()));
  }
  Ok(n)
}

/// Read `n` from `input`, consuming it to the end.
pub fn read_n(mut input: impl Read) -> anyhow::Result<u64> {
  let mut text = String::new();
  input.read_to_string(&mut text)?;
  Ok(parse_input(&text)?)
}

#[derive(Debug, Default, Args)]
pub struct StatsArgs {
  /// Print statistics about the computation to stderr
  #[arg(long, env = "BIGFACT_STATS")]
  stats: bool,
  /// Leave timing out of the statistics
  #[arg(long)]
  no_perf: bool,
}

impl StatsArgs {
  pub fn report(&self, mut stats: Stats) {
    if !self.stats {
      return;
    }
    if self.no_perf {
      stats.clear_perf();
    }
    eprintln!("{}", stats);
  }
}

#[derive(Debug, Default, Args)]
pub struct LogArgs {
  /// Log more; repeat for trace output
  #[arg(long, short, action = ArgAction::Count)]
  verbose: u8,
}

impl LogArgs {
  pub fn level(&self) -> Level {
    match self.verbose {
      0 => Level::WARN,
      1 => Level::DEBUG,
      _ => Level::TRACE,
    }
  }

  pub fn init(&self) {
    tracing_subscriber::fmt().with_writer(io::stderr).with_max_level(self.level()).init();
  }
}
