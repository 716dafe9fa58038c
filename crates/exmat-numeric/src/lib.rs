//! # exmat-numeric
//!
//! Exact numbers for exmat.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision rationals (`Rational`)
//! - Exact Gaussian rationals `a + b*I` (`Number`)
//!
//! Every coefficient in the polynomial and matrix layers is a `Number`, so
//! all arithmetic above this crate is exact.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod number;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use number::Number;
pub use rational::Rational;
