//! Multivariate polynomial GCD.
//!
//! Works recursively on the most significant variable: the gcd of two
//! polynomials is the gcd of their contents times the gcd of their primitive
//! parts, and the latter comes out of a primitive pseudo-remainder sequence.
//! Coefficients live in a field, so the result is normalized to be monic.

use exmat_core::Symbol;
use num_traits::One;

use crate::{Monomial, Poly};

/// Computes the monic greatest common divisor of `a` and `b`.
///
/// `gcd(0, 0)` is zero.
#[must_use]
pub fn gcd(a: &Poly, b: &Poly) -> Poly {
    if a.is_zero() {
        return b.monic();
    }
    if b.is_zero() || a == b {
        return a.monic();
    }
    if a.is_constant() || b.is_constant() {
        return Poly::one();
    }
    if a.num_terms() == 1 {
        return monomial_gcd(a, b);
    }
    if b.num_terms() == 1 {
        return monomial_gcd(b, a);
    }

    // both are non-constant, so both have a main symbol
    let var = match (a.main_symbol(), b.main_symbol()) {
        (Some(s), Some(t)) => s.min(t),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => return Poly::one(),
    };
    if a.degree_in(var) == 0 {
        return gcd_with_coefficients(a, b, var);
    }
    if b.degree_in(var) == 0 {
        return gcd_with_coefficients(b, a, var);
    }

    let (ca, pa) = content_and_primitive(a, var);
    let (cb, pb) = content_and_primitive(b, var);
    let c = gcd(&ca, &cb);
    let g = primitive_prs(pa, pb, var);
    (&c * &g).monic()
}

/// Content of `p` with respect to `var`: the gcd of its coefficients.
#[must_use]
pub fn content(p: &Poly, var: Symbol) -> Poly {
    let mut g = Poly::zero();
    for coeff in p.coefficients_in(var).values() {
        g = gcd(&g, coeff);
        if g.is_one() {
            break;
        }
    }
    g
}

/// Gcd of `free` (which does not contain `var`) with `p`.
fn gcd_with_coefficients(free: &Poly, p: &Poly, var: Symbol) -> Poly {
    let mut g = free.clone();
    for coeff in p.coefficients_in(var).values() {
        g = gcd(&g, coeff);
        if g.is_one() {
            break;
        }
    }
    g
}

/// The divisors of a single term are monomials.
fn monomial_gcd(term: &Poly, p: &Poly) -> Poly {
    let Some((m, _)) = term.leading_term() else {
        return p.monic();
    };
    let mut g = m.clone();
    for (pm, _) in p.terms() {
        g = g.gcd(pm);
        if g.is_one() {
            break;
        }
    }
    Poly::term(g, num_traits::One::one())
}

fn content_and_primitive(p: &Poly, var: Symbol) -> (Poly, Poly) {
    let c = content(p, var);
    match p.div_exact(&c) {
        Some(pp) => (c, pp),
        None => (Poly::one(), p.clone()),
    }
}

fn primitive_part(p: &Poly, var: Symbol) -> Poly {
    content_and_primitive(p, var).1
}

/// Pseudo-remainder of `a` by `b` in `var`, without the usual power of the
/// leading coefficient.
fn pseudo_remainder(a: &Poly, b: &Poly, var: Symbol) -> Poly {
    let db = b.degree_in(var);
    let lb = b.lcoeff_in(var);
    let mut r = a.clone();
    while !r.is_zero() {
        let dr = r.degree_in(var);
        if dr < db {
            break;
        }
        let lr = r.lcoeff_in(var);
        let shift = Poly::term(Monomial::var_pow(var, dr - db), One::one());
        r = &(&lb * &r) - &(&(&lr * &shift) * b);
    }
    r
}

/// Gcd of two primitive polynomials, both of positive degree in `var`.
fn primitive_prs(a: Poly, b: Poly, var: Symbol) -> Poly {
    let (mut a, mut b) = if a.degree_in(var) >= b.degree_in(var) {
        (a, b)
    } else {
        (b, a)
    };
    loop {
        let r = pseudo_remainder(&a, &b, var);
        if r.is_zero() {
            return b;
        }
        if r.degree_in(var) == 0 {
            return Poly::one();
        }
        a = b;
        b = primitive_part(&r, var);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exmat_numeric::Number;

    fn vars() -> (Poly, Poly, Poly) {
        (
            Poly::var(Symbol::new("gcd_x").unwrap()),
            Poly::var(Symbol::new("gcd_y").unwrap()),
            Poly::var(Symbol::new("gcd_z").unwrap()),
        )
    }

    #[test]
    fn test_univariate() {
        let (x, _, _) = vars();
        let one = Poly::one();
        // (x+1)(x-1) and (x+1)^2
        let a = &(&x + &one) * &(&x - &one);
        let b = (&x + &one).pow(2);
        assert_eq!(gcd(&a, &b), &x + &one);
    }

    #[test]
    fn test_multivariate_common_factor() {
        let (x, y, z) = vars();
        let f = &(&x * &y) + &z;
        let a = &f * &(&x + &y);
        let b = &f * &(&y - &z);
        assert_eq!(gcd(&a, &b), f);
    }

    #[test]
    fn test_coprime_and_constants() {
        let (x, y, _) = vars();
        assert!(gcd(&(&x + &y), &(&x - &y)).is_one());
        assert!(gcd(&x, &Poly::constant(Number::from_integer(7))).is_one());
        assert_eq!(gcd(&Poly::zero(), &x.scale(&Number::from_integer(3))), x);
    }

    #[test]
    fn test_monomial_gcd() {
        let (x, y, _) = vars();
        let a = (&(&x * &x) * &y).scale(&Number::from_integer(6));
        let b = &(&x * &y) + &(&x * &(&y * &y));
        assert_eq!(gcd(&a, &b), &x * &y);
    }

    #[test]
    fn test_content_in_main_variable() {
        let (x, y, _) = vars();
        let xs = Symbol::new("gcd_x").unwrap();
        // y*x^2 + y^2*x has content y in x
        let p = &(&y * &(&x * &x)) + &(&(&y * &y) * &x);
        assert_eq!(content(&p, xs), y);
    }
}
