//! Markowitz-ordered elimination for sparse matrices.
//!
//! Every cell is kept normalized, so a zero test is exact and cheap, and
//! live nonzero counts per row and column are updated as cells fill in or
//! cancel.

use tracing::trace;

use crate::element::Element;
use crate::matrix::Matrix;

/// Reduces `m`, choosing pivots among its first `n` columns only.
///
/// Returns the sign of the row and column permutation (zero if the leading
/// block turned out singular) and the column permutation:
/// `colid[c]` is the original index of column `c`. Columns at or beyond `n`
/// are never moved.
pub(crate) fn markowitz<E: Element>(m: &mut Matrix<E>, n: usize) -> (i32, Vec<usize>) {
    let rows = m.num_rows();
    let cols = m.num_cols();
    debug_assert!(n <= cols);

    let mut rowcnt = vec![0i64; rows];
    let mut colcnt = vec![0i64; cols];
    for r in 0..rows {
        for c in 0..cols {
            if !m[(r, c)].is_zero() {
                m[(r, c)] = m[(r, c)].normal();
                rowcnt[r] += 1;
                colcnt[c] += 1;
            }
        }
    }
    let mut colid: Vec<usize> = (0..cols).collect();
    let mut ab = vec![E::zero(); rows];
    let mut swaps = 0usize;

    let mut k = 0;
    while k < cols && k + 1 < rows {
        // the cell minimizing the predicted fill-in
        let mut best: Option<(i64, usize, usize)> = None;
        for r in k..rows {
            for c in k..n {
                if m[(r, c)].is_zero() {
                    continue;
                }
                debug_assert!(rowcnt[r] > 0 && colcnt[c] > 0);
                let measure = (rowcnt[r] - 1) * (colcnt[c] - 1);
                if best.map_or(true, |(m0, _, _)| measure < m0) {
                    best = Some((measure, r, c));
                }
            }
        }
        let Some((measure, pivot_r, pivot_c)) = best else {
            trace!(step = k, "markowitz: remaining block is zero");
            break;
        };
        trace!(step = k, row = pivot_r, col = pivot_c, measure, "markowitz pivot");
        debug_assert!(k <= pivot_c && pivot_c < n);

        if pivot_c != k {
            for r in 0..rows {
                m.data.swap(r * cols + pivot_c, r * cols + k);
            }
            colid.swap(pivot_c, k);
            colcnt.swap(pivot_c, k);
            swaps += 1;
        }
        if pivot_r != k {
            for c in k..cols {
                m.data.swap(pivot_r * cols + c, k * cols + c);
            }
            rowcnt.swap(pivot_r, k);
            swaps += 1;
        }

        let a = m[(k, k)].clone();
        debug_assert!(!a.is_zero());
        for r in k + 1..rows {
            let b = &m[(r, k)];
            if !b.is_zero() {
                ab[r] = b.clone() / a.clone();
                rowcnt[r] -= 1;
            }
        }
        colcnt[k] = 0;
        rowcnt[k] = 0;
        for c in k + 1..cols {
            let pivot_entry = m[(k, c)].clone();
            if pivot_entry.is_zero() {
                continue;
            }
            colcnt[c] -= 1;
            for r in k + 1..rows {
                if ab[r].is_zero() {
                    continue;
                }
                let was_zero = m[(r, c)].is_zero();
                m[(r, c)] = (m[(r, c)].clone() - ab[r].clone() * pivot_entry.clone()).normal();
                let is_zero = m[(r, c)].is_zero();
                if was_zero && !is_zero {
                    rowcnt[r] += 1;
                    colcnt[c] += 1;
                }
                if !was_zero && is_zero {
                    rowcnt[r] -= 1;
                    colcnt[c] -= 1;
                }
            }
        }
        for r in k + 1..rows {
            ab[r] = E::zero();
            m[(r, k)] = E::zero();
        }
        k += 1;
    }

    let square = rows.min(n);
    let sign = if (0..square).any(|d| m[(d, d)].is_zero()) {
        0
    } else if swaps % 2 == 0 {
        1
    } else {
        -1
    };
    (sign, colid)
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

    #[test]
    fn test_sparsest_pivot_first() {
        // column 2 and row 1 hold a single nonzero each
        let mut m = int(&[&[1, 1, 0], &[0, 0, 4], &[1, 2, 0]]);
        let (sign, colid) = markowitz(&mut m, 3);
        assert_eq!(colid[0], 2);
        assert_eq!(m[(0, 0)], Expr::from_i64(4));
        assert_ne!(sign, 0);
        let product = (0..3).fold(Expr::from_i64(1), |acc, d| acc * m[(d, d)].clone());
        // det = 4 * (1*1 - ... ) with the permutation sign restored
        assert_eq!(product * Expr::from_i64(i64::from(sign)), Expr::from_i64(-4));
    }

    #[test]
    fn test_rhs_columns_stay_put() {
        // a dense right-hand side would attract pivots if it were searched
        let mut m = int(&[&[2, 0, 1, 9], &[0, 3, 0, 8], &[1, 0, 0, 7]]);
        let (_, colid) = markowitz(&mut m, 3);
        assert_eq!(colid[3], 3);
        let mut head = colid[..3].to_vec();
        head.sort_unstable();
        assert_eq!(head, vec![0, 1, 2]);
    }

    #[test]
    fn test_singular_sign() {
        let mut m = int(&[&[1, 2], &[2, 4]]);
        let (sign, _) = markowitz(&mut m, 2);
        assert_eq!(sign, 0);
        assert!(m[(1, 1)].is_zero());
    }
}
