//! Symbol interning and variable allocation
//!
//! Symbols are interned names: two symbols with equal text share one ID, so
//! comparison and hashing are O(1) on a `u32`. Variables are not interned by
//! name. Every call to [`Interner::new_variable`] or
//! [`Interner::fresh_variable`] hands out a new `VariableId`, so two variables
//! are equal only if they came from the same allocation, whatever their
//! display names.
//!
//! The interner is passed explicitly through construction and search calls
//! rather than living in global state. It only grows: nothing is ever
//! removed, so every ID stays valid for the interner's lifetime.

use crate::error::{LogicError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// ID for an interned symbol name.
///
/// An ID is only meaningful to the interner that handed it out. Looking it
/// up in another interner, including after deserialization, gives a wrong
/// name or panics in [`Interner::resolve`]; use [`Interner::try_resolve`]
/// for IDs of unknown origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub(crate) u32);

/// Allocation-unique identity of a variable, valid only with the interner
/// that allocated it
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(pub(crate) u32);

impl Symbol {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl VariableId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Interned strings with a reverse lookup table
#[derive(Debug, Clone, Default)]
struct StringArena {
    strings: Vec<String>,
    lookup: HashMap<String, u32>,
}

impl StringArena {
    /// Intern a string, returning its ID (get-or-create)
    fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = self.strings.len() as u32;
        self.strings.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    fn resolve(&self, id: u32) -> &str {
        &self.strings[id as usize]
    }

    fn try_resolve(&self, id: u32) -> Option<&str> {
        self.strings.get(id as usize).map(String::as_str)
    }

    fn get(&self, name: &str) -> Option<u32> {
        self.lookup.get(name).copied()
    }

    fn len(&self) -> usize {
        self.strings.len()
    }
}

/// Symbol table and variable allocator for one reasoning session
#[derive(Debug, Clone, Default)]
pub struct Interner {
    symbols: StringArena,
    /// Display name of each allocated variable, indexed by `VariableId`
    variables: Vec<Symbol>,
    /// Counter behind `fresh_symbol`
    generated: u32,
}

impl Interner {
    /// Create a new empty interner
    pub fn new() -> Self {
        Interner::default()
    }

    // === Symbols ===

    /// Intern a name, returning its canonical symbol (get-or-create)
    pub fn intern(&mut self, name: &str) -> Result<Symbol> {
        if name.is_empty() {
            return Err(LogicError::EmptySymbolName);
        }
        Ok(Symbol(self.symbols.intern(name)))
    }

    /// Resolve a symbol to its name. Panics if the symbol was not created by
    /// this interner.
    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.symbols.resolve(symbol.0)
    }

    /// Resolve a symbol, or `None` if this interner never created it
    pub fn try_resolve(&self, symbol: Symbol) -> Option<&str> {
        self.symbols.try_resolve(symbol.0)
    }

    /// Check if a name is already interned
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.get(name).is_some()
    }

    /// Get the symbol for an already-interned name
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.symbols.get(name).map(Symbol)
    }

    /// Number of interned symbols
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Generate a symbol `prefix<N>` whose name was not interned before
    pub fn fresh_symbol(&mut self, prefix: &str) -> Result<Symbol> {
        if prefix.is_empty() {
            return Err(LogicError::EmptySymbolName);
        }
        loop {
            let name = format!("{}{}", prefix, self.generated);
            self.generated += 1;
            if !self.contains(&name) {
                return self.intern(&name);
            }
        }
    }

    /// Order two symbols by their text rather than by interning order
    pub fn compare(&self, a: Symbol, b: Symbol) -> Ordering {
        self.resolve(a).cmp(self.resolve(b))
    }

    // === Variables ===

    /// Allocate a new variable displayed as `name`
    pub fn new_variable(&mut self, name: &str) -> Result<VariableId> {
        let symbol = self.intern(name)?;
        Ok(self.allocate_variable(symbol))
    }

    /// Allocate a new variable sharing the display name of `like`
    pub fn fresh_variable(&mut self, like: VariableId) -> VariableId {
        let symbol = self.variable_symbol(like);
        self.allocate_variable(symbol)
    }

    fn allocate_variable(&mut self, symbol: Symbol) -> VariableId {
        let id = VariableId(self.variables.len() as u32);
        self.variables.push(symbol);
        id
    }

    /// Display name symbol of a variable
    pub fn variable_symbol(&self, id: VariableId) -> Symbol {
        self.variables[id.0 as usize]
    }

    /// Display name of a variable
    pub fn variable_name(&self, id: VariableId) -> &str {
        self.resolve(self.variable_symbol(id))
    }

    /// Display name of a variable, or `None` if this interner never
    /// allocated it
    pub fn try_variable_name(&self, id: VariableId) -> Option<&str> {
        let symbol = self.variables.get(id.0 as usize)?;
        self.try_resolve(*symbol)
    }

    /// Number of variables allocated so far
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

// IDs serialize as bare u32; names are resolved by the views in json.rs

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Symbol)
    }
}

impl Serialize for VariableId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VariableId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        u32::deserialize(deserializer).map(VariableId)
    }
}
