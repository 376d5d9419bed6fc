use std::{
  fmt,
  hash::{Hash, Hasher},
  ops::Mul,
};

/// The base of each limb.
pub const RADIX: u32 = 10_000;

/// The number of decimal digits held by a full limb.
pub const LIMB_DIGITS: usize = 4;

/// An arbitrary-precision natural number, stored as little-endian base
/// [`RADIX`] limbs.
///
/// There is always at least one limb. High limbs may be zero; they are ignored
/// when comparing, hashing, and formatting.
#[derive(Debug, Clone)]
pub struct Nat(Vec<u32>);

impl Nat {
  pub fn zero() -> Self {
    Nat(vec![0])
  }

  pub fn one() -> Self {
    Nat(vec![1])
  }

  /// The limbs, least significant first.
  pub fn limbs(&self) -> &[u32] {
    &self.0
  }

  /// The number of allocated limbs, including any high zero limbs.
  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_zero(&self) -> bool {
    self.0.iter().all(|&limb| limb == 0)
  }

  /// The limbs up to and including the most significant nonzero one; a single
  /// zero limb if the value is zero.
  fn significant(&self) -> &[u32] {
    let len = self.0.iter().rposition(|&limb| limb != 0).map_or(1, |i| i + 1);
    &self.0[..len]
  }

  /// Make sure limb `index` exists, zero-filling any new limbs.
  pub fn ensure_capacity(&mut self, index: usize) {
    if index >= self.0.len() {
      self.0.resize(index + 1, 0);
    }
  }

  /// Add `value` into the limb at `index`, carrying into higher limbs as
  /// needed. Returns the number of carries performed.
  ///
  /// `value` must be less than `RADIX * RADIX`; larger values are a bug in the
  /// caller and panic.
  pub fn add_into(&mut self, mut value: u32, mut index: usize) -> usize {
    assert!(value < RADIX * RADIX, "accumulated value {value} exceeds limb product bound");
    let mut carries = 0;
    loop {
      self.ensure_capacity(index);
      let total = value + self.0[index];
      let carry = total / RADIX;
      self.0[index] = total - carry * RADIX;
      if carry == 0 {
        return carries;
      }
      carries += 1;
      value = carry;
      index += 1;
    }
  }

  /// Multiply by `other`, returning the product along with the total number
  /// of carries performed while accumulating it.
  pub fn mul_counting(&self, other: &Nat) -> (Nat, usize) {
    let mut product = Nat::zero();
    let mut carries = 0;
    for (i, &a) in self.0.iter().enumerate() {
      for (j, &b) in other.0.iter().enumerate() {
        carries += product.add_into(a * b, i + j);
      }
    }
    (product, carries)
  }

  #[allow(clippy::should_implement_trait)]
  pub fn mul(&self, other: &Nat) -> Nat {
    self.mul_counting(other).0
  }

  /// The number of decimal digits in the canonical representation.
  pub fn digits(&self) -> usize {
    let significant = self.significant();
    let top = significant[significant.len() - 1];
    let top_digits = if top == 0 { 1 } else { top.ilog10() as usize + 1 };
    (significant.len() - 1) * LIMB_DIGITS + top_digits
  }

  pub fn to_decimal_string(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for Nat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut limbs = self.significant().iter().rev();
    if let Some(top) = limbs.next() {
      write!(f, "{top}")?;
    }
    for limb in limbs {
      write!(f, "{limb:0width$}", width = LIMB_DIGITS)?;
    }
    Ok(())
  }
}

impl PartialEq for Nat {
  fn eq(&self, other: &Self) -> bool {
    self.significant() == other.significant()
  }
}

impl Eq for Nat {}

impl Hash for Nat {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.significant().hash(state);
  }
}

impl Mul<&Nat> for &Nat {
  type Output = Nat;

  fn mul(self, rhs: &Nat) -> Nat {
    Nat::mul(self, rhs)
  }
}

impl From<u32> for Nat {
  fn from(n: u32) -> Nat {
    (n as u64).into()
  }
}

impl From<u64> for Nat {
  fn from(mut n: u64) -> Nat {
    let mut nat = Nat::zero();
    let mut index = 0;
    while n != 0 {
      nat.add_into((n % RADIX as u64) as u32, index);
      n /= RADIX as u64;
      index += 1;
    }
    nat
  }
}

impl From<usize> for Nat {
  fn from(n: usize) -> Nat {
    (n as u64).into()
  }
}
