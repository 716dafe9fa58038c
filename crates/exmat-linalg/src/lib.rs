//! # exmat-linalg
//!
//! Dense matrices of exact, possibly symbolic entries.
//!
//! This crate provides:
//! - A row-major [`Matrix`] container with exact arithmetic
//! - Four elimination strategies: Gauss, division-free, fraction-free
//!   (Bareiss) and Markowitz-ordered
//! - Determinants, including memoized minor (Laplace) expansion
//! - Linear solving with parametrized solutions of under-determined systems
//! - Inverse, rank, characteristic polynomial and integer powers
//!
//! ## Algorithm Selection
//!
//! Every operation taking an algorithm accepts an `Automatic` choice, which
//! looks at cheap statistics of the matrix:
//! - Numeric matrices: Gauss, or Markowitz when large and sparse
//! - Small dense symbolic matrices: division-free or Bareiss
//! - Other symbolic matrices: Markowitz for echelon forms, minor expansion
//!   for determinants
//!
//! The thresholds live in [`SelectionConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod config;
pub mod determinant;
pub mod elimination;
pub mod element;
pub mod error;
pub mod matrix;

mod derived;
mod solve;

pub use config::SelectionConfig;
pub use determinant::DeterminantAlgorithm;
pub use element::Element;
pub use elimination::{EchelonAlgorithm, EchelonResult};
pub use error::{LinalgError, Result};
pub use matrix::Matrix;

#[cfg(test)]
mod proptests;
