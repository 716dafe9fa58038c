//! Symbol handles backed by a global table.

use parking_lot::Mutex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

use crate::intern::{anonymous_name, is_anonymous};
use crate::SymbolTable;

static TABLE: OnceLock<Mutex<SymbolTable>> = OnceLock::new();

fn table() -> &'static Mutex<SymbolTable> {
    TABLE.get_or_init(|| Mutex::new(SymbolTable::new()))
}

/// Errors raised when creating symbols.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The name was empty.
    #[error("symbol name is empty")]
    Empty,

    /// The name is not identifier-like.
    #[error(
        "invalid symbol name {0:?}: must start with a letter or '_' and contain only alphanumerics or '_'"
    )]
    InvalidName(String),

    /// Every id for named symbols is taken.
    #[error("symbol table is full")]
    TableFull,
}

/// A symbolic unknown.
///
/// Symbols are ordered by creation; polynomials use this order as their
/// variable order, an earlier symbol being the more significant variable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Returns the symbol with the given name, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or not identifier-like, or if
    /// the table has no ids left.
    pub fn new(name: &str) -> Result<Self, SymbolError> {
        validate(name)?;
        table()
            .lock()
            .intern(name)
            .map(Self)
            .ok_or(SymbolError::TableFull)
    }

    /// Creates a fresh symbol distinct from every other symbol.
    ///
    /// Anonymous symbols store nothing in the table, and they order after
    /// every named symbol.
    ///
    /// # Panics
    ///
    /// Panics once `2^31` anonymous symbols have been created.
    #[must_use]
    pub fn anonymous() -> Self {
        Self(table().lock().fresh())
    }

    /// The symbol's name.
    #[must_use]
    pub fn name(self) -> String {
        if is_anonymous(self.0) {
            return anonymous_name(self.0);
        }
        table()
            .lock()
            .name(self.0)
            .map_or_else(|| anonymous_name(self.0), str::to_owned)
    }

    /// Number of named symbols stored in the process-wide table.
    #[must_use]
    pub fn interned_count() -> usize {
        table().lock().len()
    }

    /// Returns true for symbols made by [`Symbol::anonymous`].
    #[must_use]
    pub fn is_anonymous(self) -> bool {
        is_anonymous(self.0)
    }

    /// The raw id.
    #[must_use]
    pub fn id(self) -> u32 {
        self.0
    }
}

fn validate(name: &str) -> Result<(), SymbolError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(SymbolError::Empty);
    };
    if !(first.is_alphabetic() || first == '_') || !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Err(SymbolError::InvalidName(name.to_owned()));
    }
    Ok(())
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({}#{})", self.name(), self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_symbols_are_interned() {
        let a = Symbol::new("alpha").unwrap();
        let b = Symbol::new("alpha").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.name(), "alpha");
        assert!(!a.is_anonymous());
    }

    #[test]
    fn test_anonymous_symbols_are_fresh() {
        let a = Symbol::anonymous();
        let b = Symbol::anonymous();
        assert_ne!(a, b);
        assert!(a.is_anonymous());
        assert!(a < b);
        assert!(a > Symbol::new("zeta").unwrap());
        assert!(a.name().starts_with("symbol"));
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(Symbol::new(""), Err(SymbolError::Empty));
        assert!(matches!(Symbol::new("1x"), Err(SymbolError::InvalidName(_))));
        assert!(matches!(Symbol::new("a b"), Err(SymbolError::InvalidName(_))));
        assert!(Symbol::new("_tmp2").is_ok());
    }
}
