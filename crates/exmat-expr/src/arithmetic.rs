//! Arithmetic operations for expressions.
//!
//! Implements field operations without gcd computation; results are only
//! settled, see [`Expr::normal`] for cancellation.

use num_traits::Zero;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Expr;

impl Expr {
    /// Adds two expressions by reference.
    #[must_use]
    pub fn add_ref(&self, other: &Self) -> Self {
        if self.den() == other.den() {
            return Self::settled(self.num() + other.num(), self.den().clone());
        }
        // a/b + c/d = (ad + bc) / bd
        let num = &(self.num() * other.den()) + &(other.num() * self.den());
        let den = self.den() * other.den();
        Self::settled(num, den)
    }

    /// Subtracts another expression from this one.
    #[must_use]
    pub fn sub_ref(&self, other: &Self) -> Self {
        if self.den() == other.den() {
            return Self::settled(self.num() - other.num(), self.den().clone());
        }
        let num = &(self.num() * other.den()) - &(other.num() * self.den());
        let den = self.den() * other.den();
        Self::settled(num, den)
    }

    /// Multiplies two expressions.
    #[must_use]
    pub fn mul_ref(&self, other: &Self) -> Self {
        if self.num().is_zero() || other.num().is_zero() {
            return Self::zero();
        }
        Self::settled(self.num() * other.num(), self.den() * other.den())
    }

    /// Divides this expression by another.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_ref(&self, other: &Self) -> Self {
        assert!(!other.num().is_zero(), "division by zero");
        Self::settled(self.num() * other.den(), self.den() * other.num())
    }

    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if this is zero.
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        Self::new(self.den().clone(), self.num().clone())
    }
}

impl Add for &Expr {
    type Output = Expr;

    fn add(self, other: Self) -> Expr {
        self.add_ref(other)
    }
}

impl Add for Expr {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.add_ref(&other)
    }
}

impl Sub for &Expr {
    type Output = Expr;

    fn sub(self, other: Self) -> Expr {
        self.sub_ref(other)
    }
}

impl Sub for Expr {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.sub_ref(&other)
    }
}

impl Mul for &Expr {
    type Output = Expr;

    fn mul(self, other: Self) -> Expr {
        self.mul_ref(other)
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.mul_ref(&other)
    }
}

impl Div for &Expr {
    type Output = Expr;

    fn div(self, other: Self) -> Expr {
        self.div_ref(other)
    }
}

impl Div for Expr {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self.div_ref(&other)
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::settled(-self.num(), self.den().clone())
    }
}

impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}
