//! The interface matrix entries must provide.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use exmat_expr::Expr;

/// An exact matrix entry.
///
/// Elimination only ever divides by entries it has proven nonzero, so
/// `Div` may panic on an exact zero divisor.
pub trait Element:
    Clone
    + Eq
    + Ord
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// An integer.
    fn from_i64(n: i64) -> Self;

    /// Exact zero test.
    fn is_zero(&self) -> bool;

    /// Exact test for one.
    fn is_one(&self) -> bool;

    /// Numerator and denominator of the rational form.
    fn numer_denom(&self) -> (Self, Self);

    /// Returns true if the rational form has a non-constant denominator.
    fn is_rational_function(&self) -> bool;

    /// Cheap canonical polynomial form.
    #[must_use]
    fn expand(&self) -> Self;

    /// Rational normal form with common factors cancelled.
    #[must_use]
    fn normal(&self) -> Self;

    /// Exact polynomial division, `None` when it leaves a remainder.
    fn exact_quotient(&self, divisor: &Self) -> Option<Self>;

    /// Returns true if no symbol occurs.
    fn is_numeric(&self) -> bool;

    /// Returns true if this is a single symbol.
    fn is_atomic_symbol(&self) -> bool;

    /// The value of an integer entry that fits in `i64`.
    fn as_integer(&self) -> Option<i64>;

    /// Returns true for a real integer of any size.
    fn is_integer(&self) -> bool;

    /// Compares magnitudes of two numeric entries.
    fn magnitude_cmp(&self, other: &Self) -> Option<Ordering>;

    /// Complex conjugate.
    #[must_use]
    fn conjugate(&self) -> Self;

    /// Real part.
    #[must_use]
    fn real_part(&self) -> Self;

    /// Imaginary part.
    #[must_use]
    fn imag_part(&self) -> Self;

    /// A fresh symbol, distinct from all others.
    fn fresh_symbol() -> Self;

    /// The symbol with the given name, `None` for an invalid name.
    fn named_symbol(name: &str) -> Option<Self>;

    /// Canonical form collected in powers of `var`.
    #[must_use]
    fn collect(&self, var: &Self) -> Self;

    /// Computes `self^exp`.
    #[must_use]
    fn power(&self, exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            exp >>= 1;
            if exp > 0 {
                base = base.clone() * base;
            }
        }
        result
    }
}

impl Element for Expr {
    fn zero() -> Self {
        Expr::from_i64(0)
    }

    fn one() -> Self {
        Expr::from_i64(1)
    }

    fn from_i64(n: i64) -> Self {
        Expr::from_i64(n)
    }

    fn is_zero(&self) -> bool {
        self.num().is_zero()
    }

    fn is_one(&self) -> bool {
        self.num() == self.den()
    }

    fn numer_denom(&self) -> (Self, Self) {
        (self.numer(), self.denom())
    }

    fn is_rational_function(&self) -> bool {
        self.is_proper_rational()
    }

    fn expand(&self) -> Self {
        Expr::expand(self)
    }

    fn normal(&self) -> Self {
        Expr::normal(self)
    }

    fn exact_quotient(&self, divisor: &Self) -> Option<Self> {
        Expr::exact_quotient(self, divisor)
    }

    fn is_numeric(&self) -> bool {
        Expr::is_numeric(self)
    }

    fn is_atomic_symbol(&self) -> bool {
        Expr::is_atomic_symbol(self)
    }

    fn as_integer(&self) -> Option<i64> {
        self.as_number()?.to_i64()
    }

    fn is_integer(&self) -> bool {
        self.as_number()
            .is_some_and(|n| n.is_real() && n.re().is_integer())
    }

    fn magnitude_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.as_number()?.cmp_magnitude(&other.as_number()?))
    }

    fn conjugate(&self) -> Self {
        Expr::conjugate(self)
    }

    fn real_part(&self) -> Self {
        Expr::real_part(self)
    }

    fn imag_part(&self) -> Self {
        Expr::imag_part(self)
    }

    fn fresh_symbol() -> Self {
        Expr::fresh()
    }

    fn named_symbol(name: &str) -> Option<Self> {
        Expr::named(name).ok()
    }

    fn collect(&self, _var: &Self) -> Self {
        // a normal form is already a polynomial in every symbol over a
        // polynomial denominator
        Expr::normal(self)
    }

    fn power(&self, exp: u32) -> Self {
        self.pow(exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_element_queries() {
        let x = <Expr as Element>::named_symbol("elem_x").unwrap();
        assert!(Element::is_atomic_symbol(&x));
        assert!(!Element::is_numeric(&x));
        assert_eq!(Element::as_integer(&Expr::from_i64(-7)), Some(-7));
        assert_eq!(Element::as_integer(&Expr::ratio(1, 2)), None);
        let huge = Expr::from_i64(2).pow(70);
        assert_eq!(Element::as_integer(&huge), None);
        assert!(Element::is_integer(&huge));
        assert!(!Element::is_integer(&Expr::ratio(1, 2)));
        assert!(!Element::is_integer(&x));
        assert_eq!(
            Expr::from_i64(-3).magnitude_cmp(&Expr::from_i64(2)),
            Some(Ordering::Greater)
        );
        assert_eq!(x.magnitude_cmp(&Expr::from_i64(2)), None);
        assert!(<Expr as Element>::named_symbol("not a name").is_none());
    }

    #[test]
    fn test_rational_form() {
        let x = <Expr as Element>::named_symbol("elem_x").unwrap();
        let e = Expr::from_i64(1) / x.clone();
        assert!(Element::is_rational_function(&e));
        let (n, d) = e.numer_denom();
        assert!(Element::is_one(&n));
        assert_eq!(d, x);
        assert_eq!(Element::power(&x, 3), x.clone() * x.clone() * x);
    }
}
