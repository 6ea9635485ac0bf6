//! Unification and substitution for terms and predicates

pub mod mgu;
pub mod substitution;


pub use mgu::{contains_variable, unify, unify_all, UnificationError, UnificationResult};
pub use substitution::{Substitution, SubstitutionDisplay};
