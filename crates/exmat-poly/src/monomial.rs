//! Sparse monomials over symbols.

use exmat_core::Symbol;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// A power product `x1^e1 * x2^e2 * ...`.
///
/// Stored as `(symbol, exponent)` pairs sorted by symbol, with no zero
/// exponents, so structural equality is monomial equality.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial(SmallVec<[(Symbol, u32); 4]>);

impl Monomial {
    /// The monomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// Creates `var^exp`.
    #[must_use]
    pub fn var_pow(var: Symbol, exp: u32) -> Self {
        let mut m = Self::one();
        if exp > 0 {
            m.0.push((var, exp));
        }
        m
    }

    /// Creates a monomial from arbitrary pairs, merging repeated symbols.
    #[must_use]
    pub fn from_pairs<I: IntoIterator<Item = (Symbol, u32)>>(pairs: I) -> Self {
        let mut v: SmallVec<[(Symbol, u32); 4]> =
            pairs.into_iter().filter(|&(_, e)| e > 0).collect();
        v.sort_unstable_by_key(|&(s, _)| s);
        let mut merged: SmallVec<[(Symbol, u32); 4]> = SmallVec::with_capacity(v.len());
        for (s, e) in v {
            match merged.last_mut() {
                Some((last, acc)) if *last == s => *acc += e,
                _ => merged.push((s, e)),
            }
        }
        Self(merged)
    }

    /// Returns true for the empty product.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(symbol, exponent)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.0.iter().copied()
    }

    /// Exponent of `var`.
    #[must_use]
    pub fn degree_in(&self, var: Symbol) -> u32 {
        self.0
            .binary_search_by_key(&var, |&(s, _)| s)
            .map_or(0, |i| self.0[i].1)
    }

    /// Sum of all exponents.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().map(|&(_, e)| e).sum()
    }

    /// The same monomial with `var` removed.
    #[must_use]
    pub fn without(&self, var: Symbol) -> Self {
        Self(self.0.iter().copied().filter(|&(s, _)| s != var).collect())
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut out = SmallVec::with_capacity(self.0.len() + other.0.len());
        let (mut i, mut j) = (0, 0);
        while i < self.0.len() && j < other.0.len() {
            let (a, ea) = self.0[i];
            let (b, eb) = other.0[j];
            match a.cmp(&b) {
                Ordering::Less => {
                    out.push((a, ea));
                    i += 1;
                }
                Ordering::Greater => {
                    out.push((b, eb));
                    j += 1;
                }
                Ordering::Equal => {
                    out.push((a, ea + eb));
                    i += 1;
                    j += 1;
                }
            }
        }
        out.extend_from_slice(&self.0[i..]);
        out.extend_from_slice(&other.0[j..]);
        Self(out)
    }

    /// Divides by another monomial if possible.
    ///
    /// Returns `Some(quotient)` if self is divisible by other.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        let mut out = self.0.clone();
        for &(s, e) in &other.0 {
            let i = out.binary_search_by_key(&s, |&(t, _)| t).ok()?;
            match out[i].1.cmp(&e) {
                Ordering::Less => return None,
                Ordering::Equal => {
                    out.remove(i);
                }
                Ordering::Greater => out[i].1 -= e,
            }
        }
        Some(Self(out))
    }

    /// Greatest common divisor (componentwise minimum).
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(
            self.0
                .iter()
                .filter_map(|&(s, e)| {
                    let f = other.degree_in(s);
                    (f > 0).then_some((s, e.min(f)))
                })
                .collect(),
        )
    }
}

impl Ord for Monomial {
    /// Lexicographic order; a smaller symbol id is the more significant
    /// variable.
    fn cmp(&self, other: &Self) -> Ordering {
        let mut a = self.0.iter();
        let mut b = other.0.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some(&(sa, ea)), Some(&(sb, eb))) => match sa.cmp(&sb) {
                    // self carries the more significant variable
                    Ordering::Less => return Ordering::Greater,
                    Ordering::Greater => return Ordering::Less,
                    Ordering::Equal if ea != eb => return ea.cmp(&eb),
                    Ordering::Equal => {}
                },
            }
        }
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monomial({self})")
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        for (i, &(s, e)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            if e == 1 {
                write!(f, "{s}")?;
            } else {
                write!(f, "{s}^{e}")?;
            }
        }
        Ok(())
    }
}
