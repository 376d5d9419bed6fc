mod bigfact_cli;
mod common;

pub use bigfact_cli::*;
pub use common::*;
