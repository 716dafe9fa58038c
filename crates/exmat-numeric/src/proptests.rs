//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Number, Rational};

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-200i64..200, 1i64..50).prop_map(|(n, d)| Rational::new(n, d))
    }

    fn gaussian() -> impl Strategy<Value = Number> {
        (small_rational(), small_rational()).prop_map(|(re, im)| Number::new(re, im))
    }

    proptest! {
        #[test]
        fn rational_distributive(
            a in small_rational(),
            b in small_rational(),
            c in small_rational(),
        ) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn rational_recip_inverse(a in small_rational()) {
            if let Some(r) = a.recip() {
                prop_assert!((&a * &r).is_one());
            } else {
                prop_assert!(a.is_zero());
            }
        }

        #[test]
        fn number_mul_commutative(a in gaussian(), b in gaussian()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn number_mul_associative(a in gaussian(), b in gaussian(), c in gaussian()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn number_distributive(a in gaussian(), b in gaussian(), c in gaussian()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn number_div_then_mul(a in gaussian(), b in gaussian()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!(&(&a / &b) * &b, a);
        }

        #[test]
        fn number_conj_multiplicative(a in gaussian(), b in gaussian()) {
            prop_assert_eq!((&a * &b).conj(), &a.conj() * &b.conj());
        }

        #[test]
        fn number_norm_is_conj_product(a in gaussian()) {
            prop_assert_eq!(&a * &a.conj(), Number::real(a.norm_sqr()));
        }

        #[test]
        fn number_pow_matches_repeated_mul(a in gaussian(), e in 0u32..6) {
            let mut expected = Number::one();
            for _ in 0..e {
                expected = &expected * &a;
            }
            prop_assert_eq!(a.pow(e), expected);
        }
    }
}
