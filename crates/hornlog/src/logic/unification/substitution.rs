//! Variable substitutions
//!
//! A substitution maps variables to terms or predicates. Bindings are not
//! flattened eagerly: a value may mention variables that are themselves bound,
//! and lookups follow such chains on demand.
//!
//! Substitutions are persistent from the caller's point of view. Every
//! operation that adds bindings returns a new substitution and leaves the
//! receiver untouched, so search branches can share a parent safely.

use super::mgu::contains_variable;
use crate::error::{LogicError, Result};
use crate::logic::core::formula::Formula;
use crate::logic::core::predicate::Predicate;
use crate::logic::core::term::{Term, Variable};
use crate::logic::core::unifiable::{Unifiable, UnifiableRef};
use crate::logic::interner::Interner;
use indexmap::IndexMap;
use std::fmt;

/// A substitution mapping variables to unifiable values, in binding order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    map: IndexMap<Variable, Unifiable>,
}

impl Substitution {
    /// The identity substitution
    pub fn new() -> Self {
        Substitution {
            map: IndexMap::new(),
        }
    }

    /// A copy of this substitution with one more binding.
    ///
    /// Rejects variables that are already bound and bindings whose value
    /// contains the variable under this substitution.
    pub fn extend(&self, var: Variable, value: impl Into<Unifiable>) -> Result<Substitution> {
        if self.map.contains_key(&var) {
            return Err(LogicError::AlreadyBound(var.id));
        }
        let value = value.into();
        if contains_variable(value.as_ref(), var, self) {
            return Err(LogicError::CyclicBinding(var.id));
        }
        let mut extended = self.clone();
        extended.map.insert(var, value);
        Ok(extended)
    }

    /// Add a binding in place. Only used on private working copies.
    pub(crate) fn insert(&mut self, var: Variable, value: Unifiable) {
        self.map.insert(var, value);
    }

    /// Get the value directly bound to a variable, if any
    pub fn get(&self, var: &Variable) -> Option<&Unifiable> {
        self.map.get(var)
    }

    /// Get the value directly bound to a variable, failing if it is unbound
    pub fn binding(&self, var: &Variable) -> Result<&Unifiable> {
        self.map.get(var).ok_or(LogicError::Unbound(var.id))
    }

    pub fn is_bound(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Bindings in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Unifiable)> {
        self.map.iter()
    }

    /// Follow variable bindings until reaching a non-variable or an unbound
    /// variable
    pub fn walk<'a>(&'a self, value: UnifiableRef<'a>) -> UnifiableRef<'a> {
        let mut current = value;
        while let Some(var) = current.as_variable() {
            match self.map.get(&var) {
                Some(bound) => current = bound.as_ref(),
                None => break,
            }
        }
        current
    }

    /// True if every bound value resolves to an expression with no unbound
    /// variables in it
    pub fn is_ground(&self) -> bool {
        self.map
            .values()
            .all(|value| value.apply(self).variables().is_empty())
    }

    /// The fully resolved value of each variable in `vars`, skipping unbound
    /// ones
    pub fn resolve_all(&self, vars: &[Variable]) -> Vec<(Variable, Unifiable)> {
        vars.iter()
            .filter(|v| self.is_bound(v))
            .map(|v| (*v, Unifiable::from(*v).apply(self)))
            .collect()
    }

    /// Format this substitution with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> SubstitutionDisplay<'a> {
        SubstitutionDisplay {
            subst: self,
            interner,
        }
    }
}

impl Term {
    /// Replace bound variables by their values, following chains.
    ///
    /// A variable bound to a predicate cannot be replaced inside a term and is
    /// left as it is.
    pub fn apply(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => match subst.get(v) {
                Some(Unifiable::Term(bound)) => bound.apply(subst),
                _ => self.clone(),
            },
            Term::Function(f, args) => {
                Term::Function(*f, args.iter().map(|arg| arg.apply(subst)).collect())
            }
        }
    }
}

impl Predicate {
    /// Replace bound variables in every argument
    pub fn apply(&self, subst: &Substitution) -> Predicate {
        Predicate {
            symbol: self.symbol,
            terms: self.terms.iter().map(|t| t.apply(subst)).collect(),
        }
    }
}

impl Formula {
    /// Replace bound variables in every predicate of the formula
    pub fn apply(&self, subst: &Substitution) -> Formula {
        match self {
            Formula::Predicate(p) => Formula::Predicate(p.apply(subst)),
            Formula::And(ops) => Formula::And(ops.iter().map(|op| op.apply(subst)).collect()),
            Formula::Or(ops) => Formula::Or(ops.iter().map(|op| op.apply(subst)).collect()),
            Formula::Not(inner) => Formula::Not(Box::new(inner.apply(subst))),
        }
    }
}

impl Unifiable {
    /// Replace bound variables; a bare variable bound to a predicate becomes
    /// that predicate
    pub fn apply(&self, subst: &Substitution) -> Unifiable {
        match self {
            Unifiable::Term(Term::Variable(v)) => match subst.get(v) {
                Some(bound) => bound.apply(subst),
                None => self.clone(),
            },
            Unifiable::Term(t) => Unifiable::Term(t.apply(subst)),
            Unifiable::Predicate(p) => Unifiable::Predicate(p.apply(subst)),
        }
    }
}

/// Display wrapper rendering bindings as `{X = a, Y = f(Z)}`
pub struct SubstitutionDisplay<'a> {
    subst: &'a Substitution,
    interner: &'a Interner,
}

impl<'a> fmt::Display for SubstitutionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.subst.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{} = {}",
                var.name(self.interner),
                value.display(self.interner)
            )?;
        }
        write!(f, "}}")
    }
}
