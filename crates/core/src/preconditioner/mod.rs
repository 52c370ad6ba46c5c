//! Preconditioners.

mod ilu;
mod jacobi;

pub use ilu::{IluFactory, IluParameters};
pub use jacobi::{JacobiFactory, JacobiParameters};
