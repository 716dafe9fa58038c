//! # exmat-core
//!
//! Symbols for the exmat matrix kernel.
//!
//! This crate provides:
//! - A process-wide interning table mapping symbol names to 32-bit ids
//! - Named symbols (same name, same symbol) and fresh anonymous symbols
//!
//! Only named symbols occupy the table. Anonymous ids come from a counter
//! tagged with a high bit, so temporaries never accumulate.
//!
//! Symbols are `Copy` handles; comparing or hashing them never touches the
//! table. The numeric id doubles as the variable order used by polynomials.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod intern;
pub mod symbol;

pub use intern::SymbolTable;
pub use symbol::{Symbol, SymbolError};
