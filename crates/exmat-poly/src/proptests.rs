//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use exmat_core::Symbol;
    use exmat_numeric::Number;
    use proptest::prelude::*;

    use crate::{gcd, Monomial, Poly};

    fn symbols() -> [Symbol; 2] {
        [
            Symbol::new("prop_x").unwrap(),
            Symbol::new("prop_y").unwrap(),
        ]
    }

    // Small polynomials in two variables with integer coefficients
    fn small_poly() -> impl Strategy<Value = Poly> {
        prop::collection::vec((-5i64..=5, 0u32..3, 0u32..3), 1..4).prop_map(|terms| {
            let [x, y] = symbols();
            let mut p = Poly::zero();
            for (c, ex, ey) in terms {
                p.add_term(Monomial::from_pairs([(x, ex), (y, ey)]), Number::from_integer(c));
            }
            p
        })
    }

    fn nonzero_poly() -> impl Strategy<Value = Poly> {
        small_poly().prop_filter("nonzero", |p| !p.is_zero())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn div_exact_recovers_factor(a in small_poly(), b in nonzero_poly()) {
            prop_assert_eq!((&a * &b).div_exact(&b), Some(a));
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
            let g = gcd(&a, &b);
            prop_assert!(a.div_exact(&g).is_some());
            prop_assert!(b.div_exact(&g).is_some());
        }

        #[test]
        fn gcd_contains_common_factor(
            a in nonzero_poly(),
            b in nonzero_poly(),
            c in nonzero_poly(),
        ) {
            let g = gcd(&(&a * &c), &(&b * &c));
            prop_assert!(g.div_exact(&c).is_some());
        }
    }
}
