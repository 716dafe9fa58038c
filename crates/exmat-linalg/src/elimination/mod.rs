//! Reduction to row echelon form.
//!
//! Four strategies share one contract: they reduce a working copy in place,
//! report the sign picked up by row (and column) swaps, and in determinant
//! mode give up with sign zero as soon as a pivot column vanishes.
//!
//! - Gauss: ordinary elimination, cheap for numeric matrices
//! - Division-free: cross multiplication only, for tiny dense symbolic
//!   matrices
//! - Bareiss: cross multiplication followed by an exact division by the
//!   previous pivot
//! - Markowitz: pivots chosen to minimize fill-in, for large sparse
//!   matrices

mod bareiss;
mod divfree;
mod gauss;
mod markowitz;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::config::SelectionConfig;
use crate::element::Element;
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

pub(crate) use bareiss::fraction_free;
pub(crate) use divfree::division_free;
pub(crate) use gauss::gauss;
pub(crate) use markowitz::markowitz;

/// Strategy for reducing a matrix to echelon form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EchelonAlgorithm {
    /// Choose from statistics of the matrix.
    #[default]
    Automatic,
    /// Gaussian elimination.
    Gauss,
    /// Division-free elimination.
    Divfree,
    /// Fraction-free (Bareiss) elimination.
    Bareiss,
    /// Markowitz-ordered sparse elimination.
    Markowitz,
}

impl FromStr for EchelonAlgorithm {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "automatic" => Ok(Self::Automatic),
            "gauss" => Ok(Self::Gauss),
            "divfree" => Ok(Self::Divfree),
            "bareiss" => Ok(Self::Bareiss),
            "markowitz" => Ok(Self::Markowitz),
            other => Err(LinalgError::invalid(
                "echelon_form",
                format!("unknown elimination algorithm {other:?}"),
            )),
        }
    }
}

impl fmt::Display for EchelonAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Automatic => "automatic",
            Self::Gauss => "gauss",
            Self::Divfree => "divfree",
            Self::Bareiss => "bareiss",
            Self::Markowitz => "markowitz",
        };
        f.write_str(name)
    }
}

/// A matrix in row echelon form together with how it got there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EchelonResult<E> {
    /// The reduced matrix.
    pub reduced: Matrix<E>,
    /// Sign of the row and column permutation, zero once a pivot column
    /// was found to vanish.
    pub sign: i32,
    /// `column_permutation[c]` is the original index of reduced column `c`.
    pub column_permutation: Vec<usize>,
}

/// Outcome of a pivot search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pivot {
    /// Every candidate is zero.
    Vanishes,
    /// The pivot already sits in the current row.
    InPlace,
    /// The pivot row was swapped into the current row.
    Swapped,
}

/// Moves a nonzero entry of column `co` at or below row `ro` into row `ro`.
///
/// Symbolic pivoting takes the first candidate whose expanded form is not
/// zero; numeric pivoting takes the candidate of largest magnitude.
pub(crate) fn pivot<E: Element>(m: &mut Matrix<E>, ro: usize, co: usize, symbolic: bool) -> Pivot {
    let rows = m.num_rows();
    let found = if symbolic {
        (ro..rows).find(|&r| !m[(r, co)].expand().is_zero())
    } else {
        let mut best: Option<usize> = None;
        for r in ro..rows {
            let candidate = &m[(r, co)];
            if candidate.is_zero() {
                continue;
            }
            match best {
                Some(b) if candidate.magnitude_cmp(&m[(b, co)]) != Some(Ordering::Greater) => {}
                _ => best = Some(r),
            }
        }
        best
    };
    match found {
        None => Pivot::Vanishes,
        Some(k) if k == ro => Pivot::InPlace,
        Some(k) => {
            m.swap_rows(k, ro);
            Pivot::Swapped
        }
    }
}

/// Zeroes every row after `r0`.
pub(crate) fn clear_rows_after<E: Element>(m: &mut Matrix<E>, r0: usize) {
    for r in r0 + 1..m.num_rows() {
        for c in 0..m.num_cols() {
            m[(r, c)] = E::zero();
        }
    }
}

/// Counts of what the selection heuristics look at.
#[derive(Clone, Copy, Debug)]
struct Statistics {
    numeric: bool,
    nonzero: usize,
    cells: usize,
}

impl Statistics {
    fn gather<E: Element>(m: &Matrix<E>) -> Self {
        Self {
            numeric: m.entries().iter().all(E::is_numeric),
            nonzero: m.entries().iter().filter(|e| !e.is_zero()).count(),
            cells: m.num_rows() * m.num_cols(),
        }
    }
}

/// Picks an elimination strategy for `m`.
pub(crate) fn select_echelon<E: Element>(
    m: &Matrix<E>,
    config: &SelectionConfig,
) -> EchelonAlgorithm {
    let stats = Statistics::gather(m);
    let algorithm = if stats.numeric {
        let (num, den) = config.numeric_sparse_ratio;
        if stats.cells > config.markowitz_min_cells && stats.nonzero * den < stats.cells * num {
            EchelonAlgorithm::Markowitz
        } else {
            EchelonAlgorithm::Gauss
        }
    } else {
        let (num, den) = config.dense_ratio;
        if stats.cells < config.dense_max_cells && stats.nonzero * den > stats.cells * num {
            if stats.cells <= config.divfree_max_cells {
                EchelonAlgorithm::Divfree
            } else {
                EchelonAlgorithm::Bareiss
            }
        } else {
            EchelonAlgorithm::Markowitz
        }
    };
    debug!(
        numeric = stats.numeric,
        nonzero = stats.nonzero,
        cells = stats.cells,
        %algorithm,
        "selected elimination algorithm"
    );
    algorithm
}

/// Reduces a working copy in place, pivoting only within its first
/// `pivot_cols` columns when Markowitz ordering is used.
pub(crate) fn reduce<E: Element>(
    m: &mut Matrix<E>,
    algorithm: EchelonAlgorithm,
    pivot_cols: usize,
    config: &SelectionConfig,
) -> (i32, Vec<usize>) {
    let algorithm = match algorithm {
        EchelonAlgorithm::Automatic => select_echelon(m, config),
        explicit => explicit,
    };
    let cols = m.num_cols();
    let identity = || (0..cols).collect::<Vec<_>>();
    match algorithm {
        EchelonAlgorithm::Gauss => {
            let ids = identity();
            (gauss(m, false), ids)
        }
        EchelonAlgorithm::Divfree => {
            let ids = identity();
            (division_free(m, false), ids)
        }
        EchelonAlgorithm::Bareiss => {
            let ids = identity();
            (fraction_free(m, false), ids)
        }
        EchelonAlgorithm::Markowitz | EchelonAlgorithm::Automatic => markowitz(m, pivot_cols),
    }
}

impl<E: Element> Matrix<E> {
    /// Row echelon form using the given strategy.
    #[must_use]
    pub fn echelon_form(&self, algorithm: EchelonAlgorithm) -> EchelonResult<E> {
        let mut reduced = self.clone();
        let (sign, column_permutation) =
            reduce(&mut reduced, algorithm, self.num_cols(), &SelectionConfig::default());
        EchelonResult {
            reduced,
            sign,
            column_permutation,
        }
    }

    /// Row echelon form, with Markowitz pivots confined to the first
    /// `pivot_cols` columns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `pivot_cols` exceeds the column count.
    pub fn echelon_form_with_config(
        &self,
        algorithm: EchelonAlgorithm,
        pivot_cols: usize,
        config: &SelectionConfig,
    ) -> Result<EchelonResult<E>> {
        if pivot_cols > self.num_cols() {
            return Err(LinalgError::invalid(
                "echelon_form",
                format!("{pivot_cols} pivot columns requested, matrix has {}", self.num_cols()),
            ));
        }
        let mut reduced = self.clone();
        let (sign, column_permutation) = reduce(&mut reduced, algorithm, pivot_cols, config);
        Ok(EchelonResult {
            reduced,
            sign,
            column_permutation,
        })
    }
}
