//! Division-free elimination.

use tracing::trace;

use super::{clear_rows_after, pivot, Pivot};
use crate::element::Element;
use crate::matrix::Matrix;

/// Reduces `m` by cross multiplication with the pivot row.
///
/// Entry `(r, c)` below pivot `(r0, c0)` becomes
/// `m[r0][c0] * m[r][c] - m[r][c0] * m[r0][c]`, so rows below the `k`th
/// pivot carry spurious factors of the earlier pivots.
pub(crate) fn division_free<E: Element>(m: &mut Matrix<E>, det: bool) -> i32 {
    let rows = m.num_rows();
    let cols = m.num_cols();
    debug_assert!(!det || rows == cols);
    let mut sign = 1;
    let mut r0 = 0;
    let mut c0 = 0;
    while c0 < cols && r0 + 1 < rows {
        match pivot(m, r0, c0, true) {
            Pivot::Vanishes => {
                sign = 0;
                if det {
                    trace!(column = c0, "divfree: pivot column vanishes");
                    return 0;
                }
            }
            found => {
                if found == Pivot::Swapped {
                    sign = -sign;
                }
                for r2 in r0 + 1..rows {
                    for c in c0 + 1..cols {
                        let cross = m[(r0, c0)].clone() * m[(r2, c)].clone()
                            - m[(r2, c0)].clone() * m[(r0, c)].clone();
                        m[(r2, c)] = cross.normal();
                    }
                    for c in r0..=c0 {
                        m[(r2, c)] = E::zero();
                    }
                }
                if det {
                    for c in r0 + 1..cols {
                        m[(r0, c)] = E::zero();
                    }
                }
                r0 += 1;
            }
        }
        c0 += 1;
    }
    clear_rows_after(m, r0);
    sign
}

#[cfg(test)]
mod tests {
    use super::*;
    use exmat_expr::Expr;

    #[test]
    fn test_divfree_keeps_polynomials() {
        let mut m = Matrix::from_rows(vec![
            vec![Expr::from_i64(2), Expr::from_i64(3)],
            vec![Expr::from_i64(5), Expr::from_i64(7)],
        ])
        .unwrap();
        assert_eq!(division_free(&mut m, false), 1);
        // 2*7 - 5*3
        assert_eq!(m[(1, 1)], Expr::from_i64(-1));
        assert!(m[(1, 0)].is_zero());
    }

    #[test]
    fn test_divfree_swaps_zero_pivot() {
        let mut m = Matrix::from_rows(vec![
            vec![Expr::from_i64(0), Expr::from_i64(1)],
            vec![Expr::from_i64(1), Expr::from_i64(0)],
        ])
        .unwrap();
        assert_eq!(division_free(&mut m, true), -1);
        assert_eq!(m[(0, 0)], Expr::from_i64(1));
        assert_eq!(m[(1, 1)], Expr::from_i64(1));
    }
}
