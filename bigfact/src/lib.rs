//! Exact factorials over arbitrary-precision naturals.
//!
//! The [`Factorial`] struct is the root of the API of this crate; it drives
//! the multiplication of [`Nat`]s and records [`Stats`] as it goes.

mod factorial;
pub use factorial::*;

pub mod stats;

pub use bigfact_util::nat::Nat;
