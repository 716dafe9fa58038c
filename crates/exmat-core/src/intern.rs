//! Name interning for symbols.

use hashbrown::HashMap;

/// Tag bit marking ids handed out by [`SymbolTable::fresh`].
pub const ANONYMOUS_BIT: u32 = 1 << 31;

/// An interning table for symbol names.
///
/// Named entries are deduplicated and stored. Anonymous entries are only
/// counted: their ids carry [`ANONYMOUS_BIT`] and their names are derived
/// from the id, so allocating one never grows the table.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// Maps names of named symbols to their ids.
    by_name: HashMap<String, u32>,
    /// Names of named symbols by id.
    names: Vec<String>,
    /// Number of anonymous ids handed out so far.
    anonymous: u32,
}

impl SymbolTable {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name, returning its id.
    ///
    /// If the name already exists, returns the existing id. Returns `None`
    /// once every id below [`ANONYMOUS_BIT`] is taken.
    pub fn intern(&mut self, name: &str) -> Option<u32> {
        if let Some(&id) = self.by_name.get(name) {
            return Some(id);
        }
        let id = u32::try_from(self.names.len())
            .ok()
            .filter(|&id| id < ANONYMOUS_BIT)?;
        self.by_name.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        Some(id)
    }

    /// Allocates a fresh anonymous id.
    ///
    /// # Panics
    ///
    /// Panics after `2^31` anonymous ids; reusing one would make two fresh
    /// symbols equal.
    pub fn fresh(&mut self) -> u32 {
        let index = self.anonymous;
        assert!(
            index < ANONYMOUS_BIT,
            "anonymous symbol ids exhausted after {index} allocations"
        );
        self.anonymous = index + 1;
        index | ANONYMOUS_BIT
    }

    /// Gets the name of a named entry by id.
    ///
    /// Anonymous ids have no stored name; see [`anonymous_name`].
    #[must_use]
    pub fn name(&self, id: u32) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    /// Gets the id of a named entry, if it exists.
    #[must_use]
    pub fn get_id(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    /// Returns the number of stored (named) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Returns true if the id was allocated by [`SymbolTable::fresh`].
#[must_use]
pub fn is_anonymous(id: u32) -> bool {
    id & ANONYMOUS_BIT != 0
}

/// The printed name `symbol{n}` of an anonymous id.
#[must_use]
pub fn anonymous_name(id: u32) -> String {
    format!("symbol{}", id & !ANONYMOUS_BIT)
}
