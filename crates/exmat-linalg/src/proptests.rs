//! Property-based tests for matrix algorithms.

#[cfg(test)]
mod tests {
    use exmat_expr::Expr;
    use proptest::prelude::*;

    use crate::{DeterminantAlgorithm, EchelonAlgorithm, Element, Matrix};

    // Small integer matrices with the given shape
    fn int_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<Expr>> {
        prop::collection::vec(-5i64..=5, rows * cols).prop_map(move |v| {
            Matrix::from_row_major(rows, cols, v.into_iter().map(Expr::from_i64).collect()).unwrap()
        })
    }

    fn square() -> impl Strategy<Value = Matrix<Expr>> {
        (1usize..=4).prop_flat_map(|n| int_matrix(n, n))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn determinant_strategies_agree(a in square()) {
            let reference = a.determinant_with(DeterminantAlgorithm::Laplace).unwrap();
            for algorithm in [
                DeterminantAlgorithm::Gauss,
                DeterminantAlgorithm::Bareiss,
                DeterminantAlgorithm::Divfree,
            ] {
                prop_assert_eq!(a.determinant_with(algorithm).unwrap(), reference.clone());
            }
        }

        #[test]
        fn determinant_vanishes_iff_rank_deficient(a in square()) {
            let n = a.num_rows();
            let det = a.determinant().unwrap();
            for algorithm in [
                EchelonAlgorithm::Gauss,
                EchelonAlgorithm::Bareiss,
                EchelonAlgorithm::Markowitz,
            ] {
                prop_assert_eq!(det.is_zero(), a.rank(algorithm) < n);
            }
        }

        #[test]
        fn transpose_is_involution(
            a in (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| int_matrix(r, c)),
        ) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        #[test]
        fn transpose_keeps_determinant(a in square()) {
            prop_assert_eq!(a.transpose().determinant().unwrap(), a.determinant().unwrap());
        }

        #[test]
        fn mul_associative(
            a in int_matrix(2, 3),
            b in int_matrix(3, 2),
            c in int_matrix(2, 4),
        ) {
            let left = a.mul(&b).unwrap().mul(&c).unwrap();
            let right = a.mul(&b.mul(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn determinant_multiplicative(a in int_matrix(3, 3), b in int_matrix(3, 3)) {
            let product = a.mul(&b).unwrap().determinant().unwrap();
            prop_assert_eq!(product, a.determinant().unwrap() * b.determinant().unwrap());
        }

        #[test]
        fn inverse_is_inverse(a in square()) {
            prop_assume!(!a.determinant().unwrap().is_zero());
            let n = a.num_rows();
            let identity = Matrix::identity(n).unwrap();
            for algorithm in [
                EchelonAlgorithm::Gauss,
                EchelonAlgorithm::Bareiss,
                EchelonAlgorithm::Markowitz,
            ] {
                let inv = a.inverse(algorithm).unwrap();
                prop_assert_eq!(a.mul(&inv).unwrap(), identity.clone());
            }
        }

        #[test]
        fn solve_satisfies_system(a in int_matrix(3, 3), x in int_matrix(3, 1)) {
            prop_assume!(!a.determinant().unwrap().is_zero());
            let rhs = a.mul(&x).unwrap();
            let vars = Matrix::from_fn(3, 1, |_, _| Expr::fresh_symbol()).unwrap();
            let sol = a.solve(&vars, &rhs, EchelonAlgorithm::Automatic).unwrap();
            prop_assert_eq!(sol, x);
        }
    }
}
