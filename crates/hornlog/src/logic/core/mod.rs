//! Core data model: terms, predicates, formulas

pub mod formula;
pub mod predicate;
pub mod term;
pub mod unifiable;
