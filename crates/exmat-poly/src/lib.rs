//! # exmat-poly
//!
//! Sparse multivariate polynomials over exact Gaussian rationals.
//!
//! This crate provides:
//! - Sparse monomials over interned symbols (`Monomial`)
//! - Polynomials in lexicographic term order (`Poly`)
//! - Exact multivariate division
//! - Multivariate GCD by recursive primitive pseudo-remainder sequences
//!
//! ## Term Order
//!
//! Variables are ordered by symbol id, an older symbol being more
//! significant. The leading term of a polynomial is its largest monomial in
//! this lexicographic order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod gcd;
pub mod monomial;
pub mod poly;

#[cfg(test)]
mod proptests;

pub use gcd::gcd;
pub use monomial::Monomial;
pub use poly::Poly;
