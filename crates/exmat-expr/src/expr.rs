//! Rational function expressions.

use exmat_core::{Symbol, SymbolError};
use exmat_numeric::{Number, Rational};
use exmat_poly::{gcd, Poly};
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;

/// An exact expression `num / den`.
///
/// Every value is kept *settled*: zero is `0/1`, a constant denominator is
/// folded into the numerator, and a non-constant denominator has leading
/// coefficient 1. Settling never computes a gcd, so `num` and `den` may
/// share factors until [`Expr::normal`] cancels them.
///
/// Equality is mathematical (`a/b == c/d` iff `a*d == c*b`). The total
/// order compares normal forms and is meant for canonical sorting only.
#[derive(Clone)]
pub struct Expr {
    num: Poly,
    den: Poly,
}

impl Expr {
    /// Creates `num / den`, or `None` if `den` is zero.
    #[must_use]
    pub fn new(num: Poly, den: Poly) -> Option<Self> {
        if den.is_zero() {
            None
        } else {
            Some(Self::settled(num, den))
        }
    }

    /// Settles a quotient whose denominator is known to be nonzero.
    pub(crate) fn settled(num: Poly, den: Poly) -> Self {
        if num.is_zero() {
            return Self::zero();
        }
        if let Some(c) = den.constant_value() {
            return match c.inv() {
                Some(inv) => Self {
                    num: num.scale(&inv),
                    den: Poly::one(),
                },
                None => panic!("division by zero"),
            };
        }
        match den.lcoeff().inv() {
            Some(inv) if !inv.is_one() => Self {
                num: num.scale(&inv),
                den: den.scale(&inv),
            },
            _ => Self { num, den },
        }
    }

    /// A polynomial expression.
    #[must_use]
    pub fn from_poly(p: Poly) -> Self {
        Self {
            num: p,
            den: Poly::one(),
        }
    }

    /// A numeric expression.
    #[must_use]
    pub fn from_number(c: Number) -> Self {
        Self::from_poly(Poly::constant(c))
    }

    /// An integer.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self::from_number(Number::from_integer(n))
    }

    /// The real fraction `numerator / denominator`.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn ratio(numerator: i64, denominator: i64) -> Self {
        Self::from_number(Number::ratio(numerator, denominator))
    }

    /// The imaginary unit.
    #[must_use]
    pub fn i() -> Self {
        Self::from_number(Number::i())
    }

    /// A symbol as an expression.
    #[must_use]
    pub fn symbol(s: Symbol) -> Self {
        Self::from_poly(Poly::var(s))
    }

    /// The symbol with the given name as an expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not a valid symbol name.
    pub fn named(name: &str) -> Result<Self, SymbolError> {
        Symbol::new(name).map(Self::symbol)
    }

    /// A fresh anonymous symbol.
    #[must_use]
    pub fn fresh() -> Self {
        Self::symbol(Symbol::anonymous())
    }

    /// Numerator polynomial.
    #[must_use]
    pub fn num(&self) -> &Poly {
        &self.num
    }

    /// Denominator polynomial.
    #[must_use]
    pub fn den(&self) -> &Poly {
        &self.den
    }

    /// Numerator as an expression.
    #[must_use]
    pub fn numer(&self) -> Self {
        Self::from_poly(self.num.clone())
    }

    /// Denominator as an expression.
    #[must_use]
    pub fn denom(&self) -> Self {
        Self::from_poly(self.den.clone())
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        self.den.is_one()
    }

    /// Returns true if the denominator depends on some symbol.
    #[must_use]
    pub fn is_proper_rational(&self) -> bool {
        !self.den.is_constant()
    }

    /// Returns true if no symbol occurs.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.den.is_one() && self.num.is_constant()
    }

    /// The value of a numeric expression.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        if self.den.is_one() {
            self.num.constant_value()
        } else {
            None
        }
    }

    /// The symbol, if this expression is exactly one symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<Symbol> {
        if !self.den.is_one() || self.num.num_terms() != 1 {
            return None;
        }
        let (m, c) = self.num.leading_term()?;
        let mut factors = m.iter();
        match (factors.next(), factors.next()) {
            (Some((s, 1)), None) if c.is_one() => Some(s),
            _ => None,
        }
    }

    /// Returns true if this expression is exactly one symbol.
    #[must_use]
    pub fn is_atomic_symbol(&self) -> bool {
        self.as_symbol().is_some()
    }

    /// Number of terms of the numerator.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.num.num_terms()
    }

    /// Degree of the numerator in `var`.
    #[must_use]
    pub fn degree_in(&self, var: Symbol) -> u32 {
        self.num.degree_in(var)
    }

    /// Coefficient of `var^k` in the numerator, over the denominator.
    #[must_use]
    pub fn coefficient(&self, var: Symbol, k: u32) -> Self {
        let c = self
            .num
            .coefficients_in(var)
            .remove(&k)
            .unwrap_or_else(Poly::zero);
        Self::settled(c, self.den.clone())
    }

    /// The expanded form.
    ///
    /// Values are always stored expanded, so this is a copy.
    #[must_use]
    pub fn expand(&self) -> Self {
        self.clone()
    }

    /// The normal form: numerator and denominator without common factors.
    #[must_use]
    pub fn normal(&self) -> Self {
        if self.den.is_one() {
            return self.clone();
        }
        let g = gcd(&self.num, &self.den);
        if g.is_one() {
            return self.clone();
        }
        match (self.num.div_exact(&g), self.den.div_exact(&g)) {
            (Some(num), Some(den)) => Self::settled(num, den),
            _ => self.clone(),
        }
    }

    /// Exact quotient of two polynomial expressions.
    ///
    /// Returns `None` if either side has a denominator or the division
    /// leaves a remainder.
    #[must_use]
    pub fn exact_quotient(&self, divisor: &Self) -> Option<Self> {
        if !self.is_polynomial() || !divisor.is_polynomial() {
            return None;
        }
        self.num.div_exact(&divisor.num).map(Self::from_poly)
    }

    /// Computes `self^exp`.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self::settled(self.num.pow(exp), self.den.pow(exp))
    }

    /// Replaces `var` by `value`.
    ///
    /// Returns `None` if the denominator vanishes after substitution.
    #[must_use]
    pub fn subs(&self, var: Symbol, value: &Self) -> Option<Self> {
        let num = substitute(&self.num, var, value);
        let den = substitute(&self.den, var, value);
        if den.is_zero() {
            None
        } else {
            Some(&num / &den)
        }
    }

    /// Complex conjugate; symbols are real.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        if self.num.is_real() && self.den.is_real() {
            return self.clone();
        }
        Self::settled(self.num.conjugate(), self.den.conjugate())
    }

    /// Real part; symbols are real.
    #[must_use]
    pub fn real_part(&self) -> Self {
        if self.num.is_real() && self.den.is_real() {
            return self.clone();
        }
        (&(self + &self.conjugate()) / &Self::from_i64(2)).normal()
    }

    /// Imaginary part; symbols are real.
    #[must_use]
    pub fn imag_part(&self) -> Self {
        if self.num.is_real() && self.den.is_real() {
            return Self::zero();
        }
        let two_i = Self::from_number(Number::new(Rational::zero(), Rational::from_integer(2)));
        (&(self - &self.conjugate()) / &two_i).normal()
    }
}

fn substitute(p: &Poly, var: Symbol, value: &Expr) -> Expr {
    let mut acc = Expr::zero();
    let mut power = Expr::one();
    let mut k = 0;
    for (exp, coeff) in p.coefficients_in(var) {
        while k < exp {
            power = &power * value;
            k += 1;
        }
        acc = &acc + &(&Expr::from_poly(coeff) * &power);
    }
    acc
}

impl Zero for Expr {
    fn zero() -> Self {
        Self::from_poly(Poly::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Expr {
    fn one() -> Self {
        Self::from_poly(Poly::one())
    }

    fn is_one(&self) -> bool {
        self.num == self.den
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        if self.den == other.den {
            return self.num == other.num;
        }
        &self.num * &other.den == &other.num * &self.den
    }
}

impl Eq for Expr {}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.den.is_one() && other.den.is_one() {
            return self.num.cmp(&other.num);
        }
        let a = self.normal();
        let b = other.normal();
        a.num.cmp(&b.num).then_with(|| a.den.cmp(&b.den))
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<Number> for Expr {
    fn from(c: Number) -> Self {
        Self::from_number(c)
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        Self::symbol(s)
    }
}

impl From<Poly> for Expr {
    fn from(p: Poly) -> Self {
        Self::from_poly(p)
    }
}

fn needs_parens(p: &Poly) -> bool {
    match p.leading_term() {
        Some((m, c)) if p.num_terms() == 1 => !(c.is_one() && m.iter().count() <= 1 && !m.is_one()),
        _ => true,
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({self})")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        if self.num.num_terms() == 1 {
            write!(f, "{}", self.num)?;
        } else {
            write!(f, "({})", self.num)?;
        }
        if needs_parens(&self.den) {
            write!(f, "/({})", self.den)
        } else {
            write!(f, "/{}", self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy() -> (Expr, Expr) {
        (Expr::named("expr_x").unwrap(), Expr::named("expr_y").unwrap())
    }

    #[test]
    fn test_semantic_equality() {
        let (x, y) = xy();
        // x/y == (x*x)/(x*y)
        let a = &x / &y;
        let b = &(&x * &x) / &(&x * &y);
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_ne!(a, &y / &x);
    }

    #[test]
    fn test_normal_cancels() {
        let (x, y) = xy();
        // (x^2 - y^2) / (x + y) -> x - y
        let e = &(&(&x * &x) - &(&y * &y)) / &(&x + &y);
        assert!(!e.is_polynomial());
        let n = e.normal();
        assert!(n.is_polynomial());
        assert_eq!(n, &x - &y);
    }

    #[test]
    fn test_constant_denominator_folds() {
        let (x, _) = xy();
        let e = &x / &Expr::from_i64(4);
        assert!(e.is_polynomial());
        assert_eq!(e.to_string(), "1/4*expr_x");
    }

    #[test]
    fn test_classification() {
        let (x, y) = xy();
        assert!(x.is_atomic_symbol());
        assert!(!(&x * &y).is_atomic_symbol());
        assert!(!(&x + &Expr::one()).is_atomic_symbol());
        assert!(Expr::ratio(3, 4).is_numeric());
        assert_eq!(Expr::ratio(6, 3).as_number().and_then(|n| n.to_i64()), Some(2));
        assert!((&Expr::one() / &x).is_proper_rational());
    }

    #[test]
    fn test_subs() {
        let (x, y) = xy();
        let xs = x.as_symbol().unwrap();
        // (x^2 + y) / (x - 1) at x = 2 -> 4 + y
        let e = &(&(&x * &x) + &y) / &(&x - &Expr::one());
        let v = e.subs(xs, &Expr::from_i64(2)).unwrap();
        assert_eq!(v, &Expr::from_i64(4) + &y);
        assert_eq!(e.subs(xs, &Expr::one()), None);
    }

    #[test]
    fn test_complex_parts() {
        let (x, _) = xy();
        // (1 + 2I) * x
        let z = &Expr::from_number(Number::new(Rational::one(), Rational::from_integer(2))) * &x;
        assert_eq!(z.real_part(), x);
        assert_eq!(z.imag_part(), &Expr::from_i64(2) * &x);
        assert_eq!(z.conjugate().imag_part(), &Expr::from_i64(-2) * &x);
        assert!(x.imag_part().is_zero());
    }

    #[test]
    fn test_display() {
        let (x, y) = xy();
        assert_eq!((&x / &(&y + &Expr::one())).to_string(), "expr_x/(expr_y+1)");
        assert_eq!((&(&x + &Expr::one()) / &y).to_string(), "(expr_x+1)/expr_y");
    }
}
