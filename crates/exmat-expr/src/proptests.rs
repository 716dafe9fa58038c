//! Property-based tests for expression arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;

    use crate::Expr;

    // Linear expressions c0 + c1*x + c2*y
    fn linear() -> impl Strategy<Value = Expr> {
        (-4i64..=4, -4i64..=4, -4i64..=4).prop_map(|(c0, c1, c2)| {
            let x = Expr::named("eprop_x").unwrap();
            let y = Expr::named("eprop_y").unwrap();
            &(&Expr::from_i64(c0) + &(&Expr::from_i64(c1) * &x)) + &(&Expr::from_i64(c2) * &y)
        })
    }

    fn nonzero_linear() -> impl Strategy<Value = Expr> {
        linear().prop_filter("nonzero", |e| !num_traits::Zero::is_zero(e))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn normal_preserves_value(a in linear(), b in nonzero_linear(), c in nonzero_linear()) {
            let e = &(&a * &c) / &(&b * &c);
            prop_assert_eq!(e.normal(), &a / &b);
        }

        #[test]
        fn quotient_times_divisor(a in linear(), b in nonzero_linear()) {
            prop_assert_eq!(&(&a / &b) * &b, a);
        }

        #[test]
        fn inverse_is_inverse(a in nonzero_linear()) {
            let inv = a.inv().unwrap();
            prop_assert!((&a * &inv).is_one());
        }

        #[test]
        fn add_then_sub(a in linear(), b in nonzero_linear(), c in nonzero_linear()) {
            let q = &a / &b;
            let r = &Expr::one() / &c;
            prop_assert_eq!(&(&q + &r) - &r, q);
        }
    }
}
