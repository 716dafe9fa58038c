//! Gaussian elimination.

use tracing::trace;

use super::{clear_rows_after, pivot, Pivot};
use crate::element::Element;
use crate::matrix::Matrix;

/// Reduces `m` by subtracting multiples of each pivot row.
///
/// Numeric matrices pivot on the entry of largest magnitude. Results that
/// are not purely numeric are normalized as they are produced.
pub(crate) fn gauss<E: Element>(m: &mut Matrix<E>, det: bool) -> i32 {
    let rows = m.num_rows();
    let cols = m.num_cols();
    debug_assert!(!det || rows == cols);
    let symbolic = !m.entries().iter().all(E::is_numeric);
    let mut sign = 1;
    let mut r0 = 0;
    let mut c0 = 0;
    while c0 < cols && r0 + 1 < rows {
        match pivot(m, r0, c0, symbolic) {
            Pivot::Vanishes => {
                sign = 0;
                if det {
                    trace!(column = c0, "gauss: pivot column vanishes");
                    return 0;
                }
            }
            found => {
                if found == Pivot::Swapped {
                    sign = -sign;
                }
                for r2 in r0 + 1..rows {
                    if !m[(r2, c0)].is_zero() {
                        let piv = m[(r2, c0)].clone() / m[(r0, c0)].clone();
                        for c in c0 + 1..cols {
                            let updated = m[(r2, c)].clone() - piv.clone() * m[(r0, c)].clone();
                            m[(r2, c)] = if updated.is_numeric() {
                                updated
                            } else {
                                updated.normal()
                            };
                        }
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
