//! Sparse multivariate polynomials.

use exmat_core::Symbol;
use exmat_numeric::Number;
use num_traits::{One, Zero};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::Monomial;

/// A multivariate polynomial with Gaussian rational coefficients.
///
/// Terms are kept in a map from monomial to nonzero coefficient, so two
/// equal polynomials are structurally equal and the derived ordering is a
/// valid canonical order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Poly {
    terms: BTreeMap<Monomial, Number>,
}

impl Poly {
    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Number::one())
    }

    /// A constant polynomial.
    #[must_use]
    pub fn constant(c: Number) -> Self {
        Self::term(Monomial::one(), c)
    }

    /// The polynomial `var`.
    #[must_use]
    pub fn var(var: Symbol) -> Self {
        Self::term(Monomial::var_pow(var, 1), Number::one())
    }

    /// A single term `c * m`.
    #[must_use]
    pub fn term(m: Monomial, c: Number) -> Self {
        let mut p = Self::zero();
        p.add_term(m, c);
        p
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.constant_value().is_some_and(|c| c.is_one())
    }

    /// Returns true if no symbol occurs.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Monomial::is_one)
    }

    /// The value of a constant polynomial.
    #[must_use]
    pub fn constant_value(&self) -> Option<Number> {
        match self.terms.len() {
            0 => Some(Number::zero()),
            1 => self
                .terms
                .get(&Monomial::one())
                .cloned(),
            _ => None,
        }
    }

    /// Number of terms.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Iterates over terms from the smallest monomial to the leading one.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (&Monomial, &Number)> {
        self.terms.iter()
    }

    /// The leading term in lexicographic order.
    #[must_use]
    pub fn leading_term(&self) -> Option<(&Monomial, &Number)> {
        self.terms.last_key_value()
    }

    /// The leading coefficient, zero for the zero polynomial.
    #[must_use]
    pub fn lcoeff(&self) -> Number {
        self.leading_term()
            .map_or_else(Number::zero, |(_, c)| c.clone())
    }

    /// All symbols occurring in the polynomial.
    #[must_use]
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        self.terms
            .keys()
            .flat_map(|m| m.iter().map(|(s, _)| s))
            .collect()
    }

    /// The most significant symbol occurring, if any.
    #[must_use]
    pub fn main_symbol(&self) -> Option<Symbol> {
        // the leading monomial starts with the smallest symbol present
        self.leading_term()
            .and_then(|(m, _)| m.iter().next().map(|(s, _)| s))
    }

    /// Degree in `var`.
    #[must_use]
    pub fn degree_in(&self, var: Symbol) -> u32 {
        self.terms
            .keys()
            .map(|m| m.degree_in(var))
            .max()
            .unwrap_or(0)
    }

    /// Total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .keys()
            .map(Monomial::total_degree)
            .max()
            .unwrap_or(0)
    }

    /// Splits into coefficients of powers of `var`.
    ///
    /// The result maps each exponent to a polynomial free of `var`; zero
    /// coefficients are absent.
    #[must_use]
    pub fn coefficients_in(&self, var: Symbol) -> BTreeMap<u32, Poly> {
        let mut out: BTreeMap<u32, Poly> = BTreeMap::new();
        for (m, c) in &self.terms {
            out.entry(m.degree_in(var))
                .or_default()
                .add_term(m.without(var), c.clone());
        }
        out
    }

    /// Leading coefficient with respect to `var`.
    #[must_use]
    pub fn lcoeff_in(&self, var: Symbol) -> Poly {
        self.coefficients_in(var)
            .pop_last()
            .map_or_else(Poly::zero, |(_, c)| c)
    }

    /// Adds `c * m` in place.
    pub fn add_term(&mut self, m: Monomial, c: Number) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(m) {
            std::collections::btree_map::Entry::Vacant(e) => {
                e.insert(c);
            }
            std::collections::btree_map::Entry::Occupied(mut e) => {
                let sum = &*e.get() + &c;
                if sum.is_zero() {
                    e.remove();
                } else {
                    *e.get_mut() = sum;
                }
            }
        }
    }

    /// Subtracts `c * m * other` in place.
    fn sub_scaled(&mut self, other: &Self, m: &Monomial, c: &Number) {
        for (om, oc) in &other.terms {
            self.add_term(om.mul(m), -(oc * c));
        }
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &Number) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, v)| (m.clone(), v * c))
                .collect(),
        }
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

    /// Divides by the leading coefficient.
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.lcoeff().inv() {
            Some(inv) if !inv.is_one() => self.scale(&inv),
            _ => self.clone(),
        }
    }

    /// Conjugates every coefficient.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), c.conj()))
                .collect(),
        }
    }

    /// Returns true if every coefficient is real.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.terms.values().all(Number::is_real)
    }

    /// Exact division.
    ///
    /// Returns `None` when `divisor` is zero or does not divide `self`.
    #[must_use]
    pub fn div_exact(&self, divisor: &Self) -> Option<Self> {
        let (dm, dc) = divisor.leading_term()?;
        if divisor.terms.len() == 1 {
            let inv = dc.inv()?;
            let mut q = Self::zero();
            for (m, c) in &self.terms {
                q.add_term(m.div(dm)?, c * &inv);
            }
            return Some(q);
        }
        let mut rem = self.clone();
        let mut quot = Self::zero();
        while let Some((rm, rc)) = rem.leading_term() {
            let m = rm.div(dm)?;
            let c = rc / dc;
            rem.sub_scaled(divisor, &m, &c);
            quot.add_term(m, c);
        }
        Some(quot)
    }
}

impl From<Number> for Poly {
    fn from(c: Number) -> Self {
        Self::constant(c)
    }
}

impl From<i64> for Poly {
    fn from(n: i64) -> Self {
        Self::constant(Number::from_integer(n))
    }
}

impl From<Symbol> for Poly {
    fn from(s: Symbol) -> Self {
        Self::var(s)
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Poly {
        let (mut big, small) = if self.terms.len() >= rhs.terms.len() {
            (self.clone(), rhs)
        } else {
            (rhs.clone(), self)
        };
        for (m, c) in &small.terms {
            big.add_term(m.clone(), c.clone());
        }
        big
    }
}

impl Add for Poly {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (m, c) in rhs.terms {
            self.add_term(m, c);
        }
        self
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Poly {
        let mut out = self.clone();
        for (m, c) in &rhs.terms {
            out.add_term(m.clone(), -c);
        }
        out
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (m, c) in rhs.terms {
            self.add_term(m, -c);
        }
        self
    }
}

impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Poly {
        let mut out = Poly::zero();
        for (ma, ca) in &self.terms {
            for (mb, cb) in &rhs.terms {
                out.add_term(ma.mul(mb), ca * cb);
            }
        }
        out
    }
}

impl Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c)).collect(),
        }
    }
}

impl Neg for Poly {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in self.terms.values_mut() {
            *c = -&*c;
        }
        self
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly({self})")
    }
}

impl fmt::Display for Poly {
    /// Prints terms from the leading one down, e.g. `x^2-2*x*y+1/2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, (m, c)) in self.terms.iter().rev().enumerate() {
            let complex = !c.is_real() && !c.re().is_zero();
            let coeff = if complex { format!("({c})") } else { c.to_string() };
            let text = if m.is_one() {
                coeff
            } else if c.is_one() {
                m.to_string()
            } else if (-c).is_one() {
                format!("-{m}")
            } else {
                format!("{coeff}*{m}")
            };
            if i > 0 && !text.starts_with('-') {
                write!(f, "+")?;
            }
            write!(f, "{text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exmat_numeric::Rational;

    fn xy() -> (Poly, Poly) {
        let x = Symbol::new("poly_x").unwrap();
        let y = Symbol::new("poly_y").unwrap();
        (Poly::var(x), Poly::var(y))
    }

    #[test]
    fn test_cancellation() {
        let (x, y) = xy();
        let p = &(&x + &y) - &x;
        assert_eq!(p, y);
        assert!((&p - &y).is_zero());
    }

    #[test]
    fn test_div_exact() {
        let (x, y) = xy();
        // (x^2 - y^2) / (x - y) = x + y
        let num = &(&x * &x) - &(&y * &y);
        let den = &x - &y;
        assert_eq!(num.div_exact(&den), Some(&x + &y));
        assert_eq!(den.div_exact(&num), None);
        assert_eq!((&x + &Poly::one()).div_exact(&x), None);
    }

    #[test]
    fn test_coefficients_in() {
        let (x, y) = xy();
        let xs = Symbol::new("poly_x").unwrap();
        // 3*x^2*y + x - y
        let p = &(&(&(&x * &x) * &y).scale(&Number::from_integer(3)) + &x) - &y;
        let coeffs = p.coefficients_in(xs);
        assert_eq!(coeffs.len(), 3);
        assert_eq!(coeffs[&2], y.scale(&Number::from_integer(3)));
        assert_eq!(coeffs[&1], Poly::one());
        assert_eq!(coeffs[&0], -&y);
        assert_eq!(p.lcoeff_in(xs), y.scale(&Number::from_integer(3)));
        assert_eq!(p.degree_in(xs), 2);
        assert_eq!(p.main_symbol(), Some(xs));
    }

    #[test]
    fn test_display() {
        let (x, y) = xy();
        let half = Number::real(Rational::new(1, 2));
        let p = &(&(&x * &x) - &(&x * &y).scale(&Number::from_integer(2))) + &Poly::constant(half);
        assert_eq!(p.to_string(), "poly_x^2-2*poly_x*poly_y+1/2");
        let q = x.scale(&Number::new(Rational::one(), Rational::one()));
        assert_eq!(q.to_string(), "(1+I)*poly_x");
    }

    #[test]
    fn test_monic_and_pow() {
        let (x, _) = xy();
        let p = (&x + &Poly::one()).scale(&Number::from_integer(4));
        assert_eq!(p.monic(), &x + &Poly::one());
        let sq = (&x + &Poly::one()).pow(2);
        assert_eq!(sq.num_terms(), 3);
        assert_eq!(sq.lcoeff(), Number::one());
    }
}
