use std::{
  fmt::{self, Display},
  ops::AddAssign,
  time::Duration,
};

/// Statistics about a factorial computation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
  /// The number of `Nat` products taken.
  pub multiplications: u64,
  /// The number of limb accumulations performed by those products; one per
  /// pair of operand limbs.
  pub accumulations: u64,
  /// The number of carries pushed into a higher limb.
  pub carries: u64,

  /// The number of limbs in the result; a high water mark when stats are
  /// combined.
  pub limbs: u64,
  /// The number of decimal digits in the result.
  pub digits: u64,

  /// The total time spent multiplying.
  pub time_total: Duration,
}

impl Stats {
  /// The speed of the accumulations, in accumulations per second.
  pub fn speed(&self) -> u64 {
    if self.time_total.is_zero() {
      return 0;
    }
    (self.accumulations as f64 / self.time_total.as_secs_f64()) as u64
  }

  /// Forget timing information, leaving only the deterministic counts.
  pub fn clear_perf(&mut self) {
    self.time_total = Duration::ZERO;
  }
}

impl Display for Stats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut lines = vec![
      ("Work", None),
      ("  Multiplications", Some((self.multiplications, ""))),
      ("  Accumulations", Some((self.accumulations, ""))),
      ("  Carries", Some((self.carries, ""))),
      ("", None),
      ("Result", None),
      ("  Limbs", Some((self.limbs, ""))),
      ("  Digits", Some((self.digits, ""))),
    ];
    if !self.time_total.is_zero() {
      lines.extend([
        ("", None),
        ("Performance", None),
        ("  Time", Some((self.time_total.as_millis() as u64, "ms"))),
        ("  Speed", Some((self.speed(), "APS"))),
      ]);
    }

    // Values are right-aligned in one column, wide enough for at least a billion.
    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 3;
    let value_width = lines
      .iter()
      .filter_map(|(_, value)| value.map(|(value, _)| grouped(value).len()))
      .fold(grouped(1_000_000_000).len(), usize::max);

    for (label, value) in lines {
      write!(f, "\n{label}")?;
      if let Some((value, unit)) = value {
        let value = grouped(value);
        write!(f, "{:>width$}", value, width = label_width + value_width - label.len())?;
        if !unit.is_empty() {
          write!(f, " {unit}")?;
        }
      }
    }

    Ok(())
  }
}

/// Render `value` in decimal with `_` between groups of three digits.
fn grouped(value: u64) -> String {
  let digits = value.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, digit) in digits.chars().enumerate() {
    if i != 0 && (digits.len() - i) % 3 == 0 {
      out.push('_');
    }
    out.push(digit);
  }
  out
}

impl AddAssign<Stats> for Stats {
  fn add_assign(&mut self, rhs: Stats) {
    self.multiplications += rhs.multiplications;
    self.accumulations += rhs.accumulations;
    self.carries += rhs.carries;
    self.limbs = self.limbs.max(rhs.limbs);
    self.digits = self.digits.max(rhs.digits);
    self.time_total += rhs.time_total;
  }
}

#[test]
fn test_display() {
  let stats = Stats {
    multiplications: 4,
    accumulations: 4,
    carries: 0,
    limbs: 1,
    digits: 3,
    time_total: Duration::ZERO,
  };
  assert_eq!(
    stats.to_string(),
    "
Work
  Multiplications               4
  Accumulations                 4
  Carries                       0

Result
  Limbs                         1
  Digits                        3"
  );
}

#[test]
fn test_grouped() {
  assert_eq!(grouped(0), "0");
  assert_eq!(grouped(999), "999");
  assert_eq!(grouped(1_000), "1_000");
  assert_eq!(grouped(294_178), "294_178");
  assert_eq!(grouped(1_000_000_000), "1_000_000_000");
  assert_eq!(grouped(u64::MAX), "18_446_744_073_709_551_615");
}

#[test]
fn test_add_assign() {
  let mut total = Stats { multiplications: 1, limbs: 3, digits: 10, ..Stats::default() };
  total += Stats {
    multiplications: 2,
    carries: 5,
    limbs: 2,
    digits: 7,
    time_total: Duration::from_millis(3),
    ..Stats::default()
  };
  assert_eq!(total.multiplications, 3);
  assert_eq!(total.carries, 5);
  assert_eq!(total.limbs, 3);
  assert_eq!(total.digits, 10);
  total.clear_perf();
  assert_eq!(total.speed(), 0);
  assert!(!total.to_string().contains("Performance"));
}
