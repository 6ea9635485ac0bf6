//! hornlog: first-order logic terms, unification and SLD resolution
//!
//! This library provides interned symbols, terms and predicates, most
//! general unifiers with occurs check, persistent substitutions, and a
//! resumable depth-first search that enumerates the answers of a goal
//! against a set of Horn clauses one at a time.

pub mod config;
pub mod error;
pub mod json;
pub mod logic;
pub mod proof;

pub use config::SearchConfig;
pub use error::{LogicError, Result};

// Re-export commonly used types from logic
pub use logic::{
    unify, unify_all, Formula, FunctionInterpretation, Interner, Predicate, Substitution, Symbol,
    Term, UnificationError, UnificationResult, Unifiable, Variable, VariableId,
};

// Re-export search types
pub use proof::{HornClause, Query, RuleSet, SolutionNode, StopReason};
