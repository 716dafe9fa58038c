//! Exact expressions `P/Q` for exmat.
//!
//! This crate provides:
//! - [`Expr`], a quotient of two multivariate polynomials over exact
//!   Gaussian rationals
//! - Field arithmetic on expressions
//! - `expand` (cheap canonical form) and `normal` (gcd-cancelled form)
//! - Substitution, conjugation, real and imaginary parts
//!
//! Symbols are real valued; all complex structure is carried by the
//! coefficients.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod arithmetic;
mod expr;

pub use expr::Expr;
pub use exmat_core::{Symbol, SymbolError};
pub use exmat_numeric::{Number, Rational};
pub use exmat_poly::Poly;

#[cfg(test)]
mod proptests;
