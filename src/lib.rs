/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

mod boundary;
mod diagnostics;
mod field;
mod lattice;
mod linear_system;
mod relaxation;
mod solver;
pub use crate::boundary::*;
pub use crate::diagnostics::*;
pub use crate::field::*;
pub use crate::lattice::*;
pub use crate::linear_system::*;
pub use crate::relaxation::*;
pub use crate::solver::*;
