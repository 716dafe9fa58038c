//! Linear systems `A * X = B`.

use crate::config::SelectionConfig;
use crate::element::Element;
use crate::elimination::{reduce, EchelonAlgorithm};
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

impl<E: Element> Matrix<E> {
    /// Solves `self * vars = rhs` for the unknowns in `vars`.
    ///
    /// `vars` is an `n x p` matrix of symbols and `rhs` an `m x p` matrix for
    /// an `m x n` coefficient matrix. Unknowns the system leaves undetermined
    /// come back as themselves, so under-determined systems yield
    /// parametrized solutions.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for incompatible shapes, `InvalidArgument`
    /// if an entry of `vars` is not a symbol and `Inconsistent` if the
    /// system has no solution.
    pub fn solve(&self, vars: &Self, rhs: &Self, algorithm: EchelonAlgorithm) -> Result<Self> {
        self.solve_with_config(vars, rhs, algorithm, &SelectionConfig::default())
    }

    /// [`Matrix::solve`] with explicit selection thresholds.
    ///
    /// # Errors
    ///
    /// See [`Matrix::solve`].
    pub fn solve_with_config(
        &self,
        vars: &Self,
        rhs: &Self,
        algorithm: EchelonAlgorithm,
        config: &SelectionConfig,
    ) -> Result<Self> {
        let m = self.num_rows();
        let n = self.num_cols();
        let p = rhs.num_cols();
        if rhs.num_rows() != m {
            return Err(LinalgError::DimensionMismatch {
                op: "solve",
                left_rows: m,
                left_cols: n,
                right_rows: rhs.num_rows(),
                right_cols: p,
            });
        }
        if vars.num_rows() != n || vars.num_cols() != p {
            return Err(LinalgError::DimensionMismatch {
                op: "solve",
                left_rows: n,
                left_cols: p,
                right_rows: vars.num_rows(),
                right_cols: vars.num_cols(),
            });
        }
        if let Some(bad) = vars.entries().iter().find(|v| !v.is_atomic_symbol()) {
            return Err(LinalgError::invalid(
                "solve",
                format!("unknowns must be symbols, got {bad:?}"),
            ));
        }

        let mut aug = Self::from_fn(m, n + p, |r, c| {
            if c < n {
                self[(r, c)].clone()
            } else {
                rhs[(r, c - n)].clone()
            }
        })?;
        let (_, colid) = reduce(&mut aug, algorithm, n, config);

        let mut sol = Self::zeros(n, p)?;
        for co in 0..p {
            // columns at or past `last` already have a value
            let mut last = n;
            for r in (0..m).rev() {
                let Some(fnz) = (0..n).find(|&c| !aug[(r, c)].normal().is_zero()) else {
                    if !aug[(r, n + co)].normal().is_zero() {
                        return Err(LinalgError::Inconsistent { op: "solve" });
                    }
                    continue;
                };
                for c in fnz + 1..last {
                    sol[(colid[c], co)] = vars[(colid[c], co)].clone();
                }
                let mut e = aug[(r, n + co)].clone();
                for c in fnz + 1..n {
                    e = e - aug[(r, c)].clone() * sol[(colid[c], co)].clone();
                }
                sol[(colid[fnz], co)] = (e / aug[(r, fnz)].clone()).normal();
                last = fnz;
            }
            for c in 0..last {
                sol[(colid[c], co)] = vars[(colid[c], co)].clone();
            }
        }
        Ok(sol)
    }
}
