//! Determinants.
//!
//! Besides the elimination-based strategies this module carries a memoized
//! minor expansion. Minors over the trailing columns are built one column at
//! a time, right to left, from the previous generation of smaller minors, so
//! each `k x k` minor is computed once instead of `(n-k)!` times.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::config::SelectionConfig;
use crate::element::Element;
use crate::elimination::{division_free, fraction_free, gauss};
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

/// Strategy for computing a determinant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeterminantAlgorithm {
    /// Choose from statistics of the matrix.
    #[default]
    Automatic,
    /// Product of the diagonal after Gaussian elimination.
    Gauss,
    /// Corner entry after fraction-free elimination.
    Bareiss,
    /// Corner entry after division-free elimination, with the accumulated
    /// pivot factors divided out.
    Divfree,
    /// Memoized minor expansion.
    Laplace,
}

impl FromStr for DeterminantAlgorithm {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "automatic" => Ok(Self::Automatic),
            "gauss" => Ok(Self::Gauss),
            "bareiss" => Ok(Self::Bareiss),
            "divfree" => Ok(Self::Divfree),
            "laplace" => Ok(Self::Laplace),
            other => Err(LinalgError::invalid(
                "determinant",
                format!("unknown determinant algorithm {other:?}"),
            )),
        }
    }
}

impl fmt::Display for DeterminantAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Automatic => "automatic",
            Self::Gauss => "gauss",
            Self::Bareiss => "bareiss",
            Self::Divfree => "divfree",
            Self::Laplace => "laplace",
        };
        f.write_str(name)
    }
}

/// Picks a determinant strategy for the square matrix `m`.
pub(crate) fn select_determinant<E: Element>(
    m: &Matrix<E>,
    config: &SelectionConfig,
) -> DeterminantAlgorithm {
    let n = m.num_rows();
    let cells = n * n;
    let mut numeric = true;
    let mut nonzero = 0;
    for e in m.entries() {
        numeric &= e.is_numeric();
        let (num, _) = e.numer_denom();
        if !num.is_zero() {
            nonzero += 1;
        }
    }
    let algorithm = if numeric {
        DeterminantAlgorithm::Gauss
    } else if n > config.bareiss_min_dimension && config.sparsity_factor * nonzero <= cells {
        DeterminantAlgorithm::Bareiss
    } else {
        DeterminantAlgorithm::Laplace
    };
    debug!(n, numeric, nonzero, %algorithm, "selected determinant algorithm");
    algorithm
}

impl<E: Element> Matrix<E> {
    /// Determinant, choosing the algorithm automatically.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a non-square matrix.
    pub fn determinant(&self) -> Result<E> {
        self.determinant_with(DeterminantAlgorithm::Automatic)
    }

    /// Determinant using the given algorithm.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a non-square matrix.
    pub fn determinant_with(&self, algorithm: DeterminantAlgorithm) -> Result<E> {
        self.determinant_with_config(algorithm, &SelectionConfig::default())
    }

    /// Determinant using the given algorithm and selection thresholds.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for a non-square matrix.
    pub fn determinant_with_config(
        &self,
        algorithm: DeterminantAlgorithm,
        config: &SelectionConfig,
    ) -> Result<E> {
        self.check_square("determinant")?;
        let n = self.num_rows();
        let needs_normal = self.entries().iter().any(E::is_rational_function);
        let algorithm = match algorithm {
            DeterminantAlgorithm::Automatic => select_determinant(self, config),
            explicit => explicit,
        };

        let finish = |det: E| if needs_normal { det.normal() } else { det.expand() };

        if n == 1 {
            return Ok(finish(self[(0, 0)].clone()));
        }

        let det = match algorithm {
            DeterminantAlgorithm::Gauss => {
                let mut tmp = self.clone();
                let sign = gauss(&mut tmp, true);
                let product = (0..n).fold(E::one(), |acc, d| acc * tmp[(d, d)].clone());
                let det = (E::from_i64(sign.into()) * product).normal();
                if needs_normal {
                    det
                } else {
                    det.expand()
                }
            }
            DeterminantAlgorithm::Bareiss => {
                let mut tmp = self.clone();
                let sign = fraction_free(&mut tmp, true);
                finish(E::from_i64(sign.into()) * tmp[(n - 1, n - 1)].clone())
            }
            DeterminantAlgorithm::Divfree => {
                let mut tmp = self.clone();
                let sign = division_free(&mut tmp, true);
                if sign == 0 {
                    return Ok(E::zero());
                }
                let mut det = tmp[(n - 1, n - 1)].clone();
                // row d + 2 onwards carries the d-th pivot as a spurious factor
                for d in 0..n - 2 {
                    for _ in 0..n - d - 2 {
                        det = (det / tmp[(d, d)].clone()).normal();
                    }
                }
                E::from_i64(sign.into()) * det
            }
            DeterminantAlgorithm::Laplace | DeterminantAlgorithm::Automatic => {
                let (sorted, sign) = self.presort_columns();
                let det = E::from_i64(sign) * sorted.determinant_minor();
                if needs_normal {
                    det.normal()
                } else {
                    det
                }
            }
        };
        Ok(det)
    }

    /// Reorders columns by ascending number of zero entries, ties broken by
    /// index, returning the sorted matrix and the permutation sign.
    fn presort_columns(&self) -> (Self, i64) {
        let n = self.num_cols();
        let mut order: Vec<(usize, usize)> = (0..n)
            .map(|c| {
                let zeros = (0..self.num_rows()).filter(|&r| self[(r, c)].is_zero()).count();
                (zeros, c)
            })
            .collect();
        order.sort_unstable();
        let perm: Vec<usize> = order.into_iter().map(|(_, c)| c).collect();
        let sorted = Self {
            data: (0..self.num_rows())
                .flat_map(|r| perm.iter().map(move |&c| self[(r, c)].clone()))
                .collect(),
            num_rows: self.num_rows(),
            num_cols: n,
        };
        (sorted, permutation_sign(&perm))
    }

    /// Memoized minor expansion along the columns, right to left.
    fn determinant_minor(&self) -> E {
        let n = self.num_rows();
        let mut previous: FxHashMap<Vec<usize>, E> = FxHashMap::default();
        previous.insert(Vec::new(), E::one());

        for c in (0..n).rev() {
            let size = n - c;
            let mut next: FxHashMap<Vec<usize>, E> = FxHashMap::default();
            let mut key: Vec<usize> = (0..size).collect();
            let mut minor_key = Vec::with_capacity(size - 1);
            loop {
                let mut det = E::zero();
                for (pos, &r) in key.iter().enumerate() {
                    let entry = &self[(r, c)];
                    if entry.is_zero() {
                        continue;
                    }
                    minor_key.clear();
                    minor_key.extend(
                        key.iter()
                            .enumerate()
                            .filter(|&(i, _)| i != pos)
                            .map(|(_, &k)| k),
                    );
                    let Some(minor) = previous.get(&minor_key) else {
                        continue;
                    };
                    let term = entry.clone() * minor.clone();
                    det = if pos % 2 == 1 { det - term } else { det + term };
                }
                let det = det.expand();
                if !det.is_zero() {
                    next.insert(key.clone(), det);
                }
                if !next_combination(&mut key, n) {
                    break;
                }
            }
            trace!(column = c, minors = next.len(), "laplace generation");
            if next.is_empty() {
                return E::zero();
            }
            previous = next;
        }

        let full: Vec<usize> = (0..n).collect();
        previous.remove(&full).unwrap_or_else(E::zero)
    }
}

/// Advances `key` to the next sorted combination of `0..n` of the same
/// size in lexicographic order, returning false after the last one.
fn next_combination(key: &mut [usize], n: usize) -> bool {
    let k = key.len();
    let Some(i) = (0..k).rev().find(|&i| key[i] < n - k + i) else {
        return false;
    };
    key[i] += 1;
    for j in i + 1..k {
        key[j] = key[j - 1] + 1;
    }
    true
}

/// Sign of a permutation, from the parity of its inversions.
fn permutation_sign(perm: &[usize]) -> i64 {
    let mut inversions = 0usize;
    for i in 0..perm.len() {
        for j in i + 1..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    if inversions % 2 == 0 {
        1
    } else {
        -1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exmat_expr::Expr;

    fn int(rows: &[&[i64]]) -> Matrix<Expr> {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Expr::from_i64(v)).collect())
                .collect(),
        )
        .unwrap()
    }

    const ALGORITHMS: [DeterminantAlgorithm; 5] = [
        DeterminantAlgorithm::Automatic,
        DeterminantAlgorithm::Gauss,
        DeterminantAlgorithm::Bareiss,
        DeterminantAlgorithm::Divfree,
        DeterminantAlgorithm::Laplace,
    ];

    #[test]
    fn test_next_combination() {
        let mut key = vec![0, 1];
        let mut seen = vec![key.clone()];
        while next_combination(&mut key, 4) {
            seen.push(key.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        let mut empty: Vec<usize> = vec![];
        assert!(!next_combination(&mut empty, 3));
    }

    #[test]
    fn test_permutation_sign() {
        assert_eq!(permutation_sign(&[0, 1, 2]), 1);
        assert_eq!(permutation_sign(&[1, 0, 2]), -1);
        assert_eq!(permutation_sign(&[2, 0, 1]), 1);
    }

    #[test]
    fn test_numeric_all_algorithms() {
        let a = int(&[&[3, 1, 4, 1], &[5, 9, 2, 6], &[5, 3, 5, 8], &[9, 7, 9, 3]]);
        for algorithm in ALGORITHMS {
            assert_eq!(a.determinant_with(algorithm).unwrap(), Expr::from_i64(98), "{algorithm}");
        }
    }

    #[test]
    fn test_symbolic_all_algorithms() {
        let a = Matrix::<Expr>::symbolic(3, 3, "det").unwrap();
        let e = |r, c| a[(r, c)].clone();
        let expected = e(0, 0) * (e(1, 1) * e(2, 2) - e(1, 2) * e(2, 1))
            - e(0, 1) * (e(1, 0) * e(2, 2) - e(1, 2) * e(2, 0))
            + e(0, 2) * (e(1, 0) * e(2, 1) - e(1, 1) * e(2, 0));
        for algorithm in ALGORITHMS {
            let det = a.determinant_with(algorithm).unwrap();
            assert_eq!(det, expected, "{algorithm}");
            assert!(det.is_polynomial(), "{algorithm}");
        }
    }

    #[test]
    fn test_rational_entries_normalized() {
        let x = Expr::named("det_x").unwrap();
        let one = Expr::from_i64(1);
        let a = Matrix::from_rows(vec![
            vec![one.clone() / x.clone(), one.clone()],
            vec![one.clone(), x.clone() + one.clone()],
        ])
        .unwrap();
        // (x+1)/x - 1 = 1/x
        for algorithm in ALGORITHMS {
            let det = a.determinant_with(algorithm).unwrap();
            assert_eq!(det, one.clone() / x.clone(), "{algorithm}");
            assert!(det.den() == x.num(), "{algorithm}");
        }
    }

    #[test]
    fn test_singular_and_trivial() {
        let a = int(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        for algorithm in ALGORITHMS {
            assert!(a.determinant_with(algorithm).unwrap().is_zero(), "{algorithm}");
        }
        let single = int(&[&[-4]]);
        assert_eq!(single.determinant().unwrap(), Expr::from_i64(-4));
        assert!(matches!(
            int(&[&[1, 2]]).determinant(),
            Err(LinalgError::NotSquare { op: "determinant", .. })
        ));
    }

    #[test]
    fn test_laplace_presort_sign() {
        // the zero-heavy first column moves to the end
        let a = int(&[&[0, 1, 2], &[0, 3, 4], &[5, 6, 7]]);
        let (sorted, sign) = a.presort_columns();
        assert_eq!(sorted[(2, 2)], Expr::from_i64(5));
        assert_eq!(sign, 1);
        assert_eq!(
            a.determinant_with(DeterminantAlgorithm::Laplace).unwrap(),
            Expr::from_i64(-10)
        );
    }

    #[test]
    fn test_sparse_symbolic_prefers_bareiss() {
        let config = SelectionConfig::default();
        let x = Expr::named("det_sparse").unwrap();
        let mut a = Matrix::<Expr>::identity(5).unwrap();
        a[(0, 0)] = x.clone();
        assert_eq!(select_determinant(&a, &config), DeterminantAlgorithm::Bareiss);
        assert_eq!(a.determinant().unwrap(), x);

        // one more nonzero tips it over the sparsity bound
        a[(0, 1)] = x.clone();
        assert_eq!(select_determinant(&a, &config), DeterminantAlgorithm::Laplace);
        assert_eq!(a.determinant().unwrap(), x);

        // too small for fraction-free elimination
        let small = Matrix::from_rows(vec![
            vec![x.clone(), Expr::from_i64(0), Expr::from_i64(0)],
            vec![Expr::from_i64(0), Expr::from_i64(1), Expr::from_i64(0)],
            vec![Expr::from_i64(0), Expr::from_i64(0), Expr::from_i64(0)],
        ])
        .unwrap();
        assert_eq!(select_determinant(&small, &config), DeterminantAlgorithm::Laplace);
        let numeric = int(&[&[1, 0], &[0, 1]]);
        assert_eq!(select_determinant(&numeric, &config), DeterminantAlgorithm::Gauss);
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(
            "laplace".parse::<DeterminantAlgorithm>(),
            Ok(DeterminantAlgorithm::Laplace)
        );
        assert!("markowitz".parse::<DeterminantAlgorithm>().is_err());
    }
}
