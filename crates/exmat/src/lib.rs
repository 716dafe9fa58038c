//! # exmat
//!
//! Exact matrix algebra over numbers, symbols and rational functions.
//!
//! ## Features
//!
//! - **Exact Numbers**: Arbitrary-precision Gaussian rationals
//! - **Rational Functions**: Multivariate polynomials with gcd-based
//!   normalization
//! - **Elimination**: Gauss, division-free, Bareiss and Markowitz strategies
//!   picked from matrix statistics
//! - **Determinants**: Memoized minor expansion for symbolic matrices
//! - **Linear Systems**: Parametrized solutions of under-determined systems
//!
//! ## Quick Start
//!
//! ```rust
//! use exmat::prelude::*;
//!
//! let a = Matrix::<Expr>::symbolic(2, 2, "a").unwrap();
//! let det = a.determinant().unwrap();
//! let expected = a[(0, 0)].clone() * a[(1, 1)].clone() - a[(0, 1)].clone() * a[(1, 0)].clone();
//! assert_eq!(det, expected);
//!
//! let b = Matrix::from_rows(vec![
//!     vec![Expr::from_i64(1), Expr::from_i64(2)],
//!     vec![Expr::from_i64(3), Expr::from_i64(4)],
//! ])
//! .unwrap();
//! let inv = b.inverse(EchelonAlgorithm::Automatic).unwrap();
//! assert_eq!(inv[(1, 0)], Expr::ratio(3, 2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exmat_core as core;
pub use exmat_expr as expr;
pub use exmat_linalg as linalg;
pub use exmat_numeric as numeric;
pub use exmat_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exmat_core::Symbol;
    pub use exmat_expr::Expr;
    pub use exmat_linalg::{
        DeterminantAlgorithm, EchelonAlgorithm, Element, LinalgError, Matrix, SelectionConfig,
    };
    pub use exmat_numeric::{Number, Rational};
    pub use exmat_poly::Poly;
}
