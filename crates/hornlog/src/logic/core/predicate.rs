//! Predicates: named relations over terms

use super::term::{Term, Variable};
use crate::logic::interner::{Interner, Symbol, VariableId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A predicate symbol applied to an ordered list of terms
///
/// With no terms the predicate is a propositional atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub symbol: Symbol,
    pub terms: Vec<Term>,
}

impl Predicate {
    pub fn new(symbol: Symbol, terms: Vec<Term>) -> Self {
        Predicate { symbol, terms }
    }

    /// A 0-ary predicate
    pub fn proposition(symbol: Symbol) -> Self {
        Predicate {
            symbol,
            terms: Vec::new(),
        }
    }

    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    pub fn is_propositional(&self) -> bool {
        self.terms.is_empty()
    }

    /// Get all variables in this predicate, in order of first appearance
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    pub fn collect_variables(&self, vars: &mut Vec<Variable>) {
        for term in &self.terms {
            term.collect_variables(vars);
        }
    }

    /// Copy this predicate with its variables renamed through `renaming`
    pub fn standardize_apart(
        &self,
        renaming: &mut HashMap<VariableId, VariableId>,
        interner: &mut Interner,
    ) -> Predicate {
        Predicate {
            symbol: self.symbol,
            terms: self
                .terms
                .iter()
                .map(|t| t.standardize_apart(renaming, interner))
                .collect(),
        }
    }

    /// Format this predicate with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> PredicateDisplay<'a> {
        PredicateDisplay {
            predicate: self,
            interner,
        }
    }
}

/// Display wrapper for Predicate that includes an interner for name resolution
pub struct PredicateDisplay<'a> {
    predicate: &'a Predicate,
    interner: &'a Interner,
}

impl<'a> fmt::Display for PredicateDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.interner.resolve(self.predicate.symbol))?;
        if !self.predicate.terms.is_empty() {
            write!(f, "(")?;
            for (i, term) in self.predicate.terms.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", term.display(self.interner))?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)?;
        if !self.terms.is_empty() {
            write!(f, "(")?;
            for (i, term) in self.terms.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", term)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
