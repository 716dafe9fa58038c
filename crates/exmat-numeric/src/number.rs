//! Exact Gaussian rationals.
//!
//! A [`Number`] is `re + im*I` with both parts exact rationals. Every
//! coefficient of a polynomial and every numeric matrix entry is one of
//! these.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Rational;

/// An exact complex rational number.
///
/// The derived ordering (real part first, then imaginary part) is a total
/// order used for canonical sorting only; it is not a field ordering.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Number {
    re: Rational,
    im: Rational,
}

impl Number {
    /// Creates `re + im*I`.
    #[must_use]
    pub fn new(re: Rational, im: Rational) -> Self {
        Self { re, im }
    }

    /// Creates a real number.
    #[must_use]
    pub fn real(re: Rational) -> Self {
        Self {
            re,
            im: Rational::zero(),
        }
    }

    /// Creates an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self::real(Rational::from_integer(n))
    }

    /// Creates the real fraction `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn ratio(numerator: i64, denominator: i64) -> Self {
        Self::real(Rational::new(numerator, denominator))
    }

    /// The imaginary unit.
    #[must_use]
    pub fn i() -> Self {
        Self {
            re: Rational::zero(),
            im: Rational::one(),
        }
    }

    /// Real part.
    #[must_use]
    pub fn re(&self) -> &Rational {
        &self.re
    }

    /// Imaginary part.
    #[must_use]
    pub fn im(&self) -> &Rational {
        &self.im
    }

    /// Returns true if the imaginary part vanishes.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    /// Converts to `i64` when this is a real integer in range.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_real() {
            self.re.to_i64()
        } else {
            None
        }
    }

    /// Complex conjugate.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: -&self.im,
        }
    }

    /// Squared modulus `re^2 + im^2`.
    #[must_use]
    pub fn norm_sqr(&self) -> Rational {
        &self.re * &self.re + &self.im * &self.im
    }

    /// Multiplicative inverse, or `None` for zero.
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        let norm = self.norm_sqr().recip()?;
        Some(Self {
            re: &self.re * &norm,
            im: -(&self.im * &norm),
        })
    }

    /// Compares moduli.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.norm_sqr().cmp(&other.norm_sqr())
    }

    /// Computes `self^exp` by repeated squaring.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Returns true if the value is written with a leading minus sign.
    #[must_use]
    pub fn is_negative_looking(&self) -> bool {
        if self.re.is_zero() {
            self.im.is_negative()
        } else {
            self.re.is_negative()
        }
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl One for Number {
    fn one() -> Self {
        Self::real(Rational::one())
    }

    fn is_one(&self) -> bool {
        self.re.is_one() && self.im.is_zero()
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({self})")
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let imag = |f: &mut fmt::Formatter<'_>, im: &Rational| -> fmt::Result {
            if im.is_one() {
                write!(f, "I")
            } else if (-im).is_one() {
                write!(f, "-I")
            } else {
                write!(f, "{im}*I")
            }
        };
        match (self.re.is_zero(), self.im.is_zero()) {
            (_, true) => write!(f, "{}", self.re),
            (true, false) => imag(f, &self.im),
            (false, false) => {
                write!(f, "{}", self.re)?;
                if !self.im.is_negative() {
                    write!(f, "+")?;
                }
                imag(f, &self.im)
            }
        }
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Number {
        Number {
            re: &self.re + &rhs.re,
            im: &self.im + &rhs.im,
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Number {
        Number {
            re: &self.re - &rhs.re,
            im: &self.im - &rhs.im,
        }
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Number {
        if self.is_real() && rhs.is_real() {
            return Number::real(&self.re * &rhs.re);
        }
        Number {
            re: &self.re * &rhs.re - &self.im * &rhs.im,
            im: &self.re * &rhs.im + &self.im * &rhs.re,
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Div for &Number {
    type Output = Number;

    /// # Panics
    ///
    /// Panics on division by zero.
    fn div(self, rhs: Self) -> Number {
        if self.is_real() && rhs.is_real() {
            assert!(!rhs.re.is_zero(), "division by zero");
            return Number::real(&self.re / &rhs.re);
        }
        match rhs.inv() {
            Some(inv) => self * &inv,
            None => panic!("division by zero"),
        }
    }
}

impl Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        &self / &rhs
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number {
            re: -&self.re,
            im: -&self.im,
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Self::real(r)
    }
}
