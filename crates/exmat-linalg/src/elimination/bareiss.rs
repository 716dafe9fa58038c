//! Fraction-free (Bareiss) elimination.
//!
//! Numerators and denominators are tracked in two separate matrices. The
//! cross-multiplied numerator and denominator are each divided exactly by
//! the numerator and denominator of the previous pivot, which keeps entries
//! from growing the way they do under division-free elimination.

use tracing::{debug, trace};

use crate::element::Element;
use crate::matrix::Matrix;

/// Exact quotient `dividend / divisor`, falling back to a normalized
/// rational division when the polynomial division leaves a remainder.
fn divide_exactly<E: Element>(dividend: &E, divisor: &E) -> E {
    if divisor.is_one() {
        return dividend.clone();
    }
    match dividend.exact_quotient(divisor) {
        Some(q) => q,
        None => {
            debug!(?dividend, ?divisor, "bareiss: inexact quotient, dividing rationally");
            (dividend.clone() / divisor.clone()).normal()
        }
    }
}

/// Reduces `m` with fraction-free elimination.
///
/// In determinant mode each finished pivot row is dropped, so the bottom
/// right entry is the only meaningful one left.
pub(crate) fn fraction_free<E: Element>(m: &mut Matrix<E>, det: bool) -> i32 {
    let rows = m.num_rows();
    let cols = m.num_cols();
    debug_assert!(!det || rows == cols);
    if rows == 1 {
        return 1;
    }

    let mut sign = 1;
    let mut divisor_n = E::one();
    let mut divisor_d = E::one();
    let mut tmp_n = Vec::with_capacity(rows * cols);
    let mut tmp_d = Vec::with_capacity(rows * cols);
    for e in m.entries() {
        let (n, d) = e.normal().numer_denom();
        tmp_n.push(n);
        tmp_d.push(d);
    }
    let at = |r: usize, c: usize| r * cols + c;

    let mut r0 = 0;
    let mut c0 = 0;
    while c0 < cols && r0 + 1 < rows {
        let Some(indx) = (r0..rows).find(|&r| !tmp_n[at(r, c0)].expand().is_zero()) else {
            sign = 0;
            if det {
                trace!(column = c0, "bareiss: pivot column vanishes");
                return 0;
            }
            c0 += 1;
            continue;
        };
        if indx > r0 {
            sign = -sign;
            for c in c0..cols {
                tmp_n.swap(at(indx, c), at(r0, c));
                tmp_d.swap(at(indx, c), at(r0, c));
            }
        }
        for r2 in r0 + 1..rows {
            for c in c0 + 1..cols {
                let dividend_n = (tmp_n[at(r0, c0)].clone()
                    * tmp_n[at(r2, c)].clone()
                    * tmp_d[at(r2, c0)].clone()
                    * tmp_d[at(r0, c)].clone()
                    - tmp_n[at(r2, c0)].clone()
                        * tmp_n[at(r0, c)].clone()
                        * tmp_d[at(r0, c0)].clone()
                        * tmp_d[at(r2, c)].clone())
                .expand();
                let dividend_d = (tmp_d[at(r2, c0)].clone()
                    * tmp_d[at(r0, c)].clone()
                    * tmp_d[at(r0, c0)].clone()
                    * tmp_d[at(r2, c)].clone())
                .expand();
                tmp_n[at(r2, c)] = divide_exactly(&dividend_n, &divisor_n);
                tmp_d[at(r2, c)] = divide_exactly(&dividend_d, &divisor_d);
            }
            for c in r0..=c0 {
                tmp_n[at(r2, c)] = E::zero();
            }
        }
        divisor_n = tmp_n[at(r0, c0)].expand();
        divisor_d = tmp_d[at(r0, c0)].expand();
        if det {
            for c in 0..cols {
                tmp_n[at(r0, c)] = E::zero();
                tmp_d[at(r0, c)] = E::one();
            }
        }
        r0 += 1;
        c0 += 1;
    }
    for r in r0 + 1..rows {
        for c in 0..cols {
            tmp_n[at(r, c)] = E::zero();
        }
    }

    for (i, (n, d)) in tmp_n.into_iter().zip(tmp_d).enumerate() {
        m[(i / cols, i % cols)] = if n.is_zero() { E::zero() } else { n / d };
    }
    sign
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
    fn test_bareiss_corner_is_determinant() {
        let mut m = int(&[&[2, 1, 3], &[1, 0, 1], &[4, 1, 2]]);
        assert_eq!(fraction_free(&mut m, true), 1);
        // det = 2*(0-1) - 1*(2-4) + 3*(1-0) = 3
        assert_eq!(m[(2, 2)], Expr::from_i64(3));
    }

    #[test]
    fn test_bareiss_rational_entries() {
        let x = Expr::named("bareiss_x").unwrap();
        let one = Expr::from_i64(1);
        // [[1/x, 1], [1, x]] has determinant 0
        let mut m = Matrix::from_rows(vec![
            vec![one.clone() / x.clone(), one.clone()],
            vec![one, x],
        ])
        .unwrap();
        let sign = fraction_free(&mut m, true);
        assert!(sign == 0 || m[(1, 1)].is_zero());
    }

    #[test]
    fn test_bareiss_echelon_rank_deficient() {
        let mut m = int(&[&[1, 2, 3], &[2, 4, 6], &[1, 1, 1]]);
        fraction_free(&mut m, false);
        assert!(m[(1, 0)].is_zero() && m[(2, 0)].is_zero() && m[(2, 1)].is_zero());
        let zero_rows = (0..3)
            .filter(|&r| (0..3).all(|c| m[(r, c)].is_zero()))
            .count();
        assert_eq!(zero_rows, 1);
    }

    #[test]
    fn test_single_row_untouched() {
        let mut m = int(&[&[0, 5, 7]]);
        assert_eq!(fraction_free(&mut m, false), 1);
        assert_eq!(m, int(&[&[0, 5, 7]]));
    }
}
