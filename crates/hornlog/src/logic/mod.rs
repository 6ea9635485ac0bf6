//! First-order logic representation and manipulation
//!
//! This module provides the fundamental types for representing FOL formulas:
//! interned symbols, terms, predicates, formulas, substitutions and
//! unification.

pub mod core;
pub mod interner;
pub mod semantics;
pub mod unification;

// Re-export commonly used types
pub use core::formula::{Formula, FormulaDisplay};
pub use core::predicate::{Predicate, PredicateDisplay};
pub use core::term::{Term, TermDisplay, Variable};
pub use core::unifiable::{Unifiable, UnifiableDisplay, UnifiableRef};
pub use interner::{Interner, Symbol, VariableId};
pub use semantics::FunctionInterpretation;
pub use unification::{
    contains_variable, unify, unify_all, Substitution, SubstitutionDisplay, UnificationError,
    UnificationResult,
};
