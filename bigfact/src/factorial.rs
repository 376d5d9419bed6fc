use std::time::Instant;

use tracing::{debug, trace};

use bigfact_util::nat::Nat;

use crate::stats::Stats;

/// A factorial driver.
///
/// The product is built by repeated multiplication of a running [`Nat`] by
/// each factor in `2..=n`, so memory grows with the result, not with `n`.
#[derive(Debug, Default)]
pub struct Factorial {
  /// Statistics accumulated over every computation run by this driver.
  pub stats: Stats,
}

impl Factorial {
  pub fn new() -> Self {
    Self::default()
  }

  /// Compute `n!`.
  pub fn compute(&mut self, n: u64) -> Nat {
    let start = Instant::now();
    let mut product = Nat::one();
    for i in 2..=n {
      let factor = Nat::from(i);
      let (next, carries) = product.mul_counting(&factor);
      self.stats.multiplications += 1;
      self.stats.accumulations += (product.len() * factor.len()) as u64;
      self.stats.carries += carries as u64;
      product = next;
      trace!(factor = i, limbs = product.len(), carries, "multiplied");
    }
    self.stats.time_total += start.elapsed();
    self.stats.limbs = self.stats.limbs.max(product.len() as u64);
    self.stats.digits = self.stats.digits.max(product.digits() as u64);
    debug!(n, limbs = product.len(), digits = product.digits(), "computed factorial");
    product
  }
}

/// Compute `n!` without keeping statistics.
pub fn factorial(n: u64) -> Nat {
  Factorial::new().compute(n)
}
