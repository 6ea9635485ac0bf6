//! Expressions that can take part in unification
//!
//! Both terms and predicates unify, and a variable can be bound to either, so
//! substitution values are a small sum type over the two.

use super::predicate::Predicate;
use super::term::{Term, Variable};
use crate::logic::interner::Interner;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An owned term or predicate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unifiable {
    Term(Term),
    Predicate(Predicate),
}

/// A borrowed term or predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnifiableRef<'a> {
    Term(&'a Term),
    Predicate(&'a Predicate),
}

impl Unifiable {
    pub fn as_ref(&self) -> UnifiableRef<'_> {
        match self {
            Unifiable::Term(t) => UnifiableRef::Term(t),
            Unifiable::Predicate(p) => UnifiableRef::Predicate(p),
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Unifiable::Term(t) => Some(t),
            Unifiable::Predicate(_) => None,
        }
    }

    pub fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            Unifiable::Term(_) => None,
            Unifiable::Predicate(p) => Some(p),
        }
    }

    /// The variable this value consists of, if it is a bare variable
    pub fn as_variable(&self) -> Option<Variable> {
        self.as_ref().as_variable()
    }

    pub fn variables(&self) -> Vec<Variable> {
        match self {
            Unifiable::Term(t) => t.variables(),
            Unifiable::Predicate(p) => p.variables(),
        }
    }

    pub fn display<'a>(&'a self, interner: &'a Interner) -> UnifiableDisplay<'a> {
        UnifiableDisplay {
            value: self.as_ref(),
            interner,
        }
    }
}

impl<'a> UnifiableRef<'a> {
    pub fn as_variable(self) -> Option<Variable> {
        match self {
            UnifiableRef::Term(Term::Variable(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn to_owned(self) -> Unifiable {
        match self {
            UnifiableRef::Term(t) => Unifiable::Term(t.clone()),
            UnifiableRef::Predicate(p) => Unifiable::Predicate(p.clone()),
        }
    }
}

impl From<Term> for Unifiable {
    fn from(t: Term) -> Self {
        Unifiable::Term(t)
    }
}

impl From<Variable> for Unifiable {
    fn from(v: Variable) -> Self {
        Unifiable::Term(Term::Variable(v))
    }
}

impl From<Predicate> for Unifiable {
    fn from(p: Predicate) -> Self {
        Unifiable::Predicate(p)
    }
}

impl<'a> From<&'a Term> for UnifiableRef<'a> {
    fn from(t: &'a Term) -> Self {
        UnifiableRef::Term(t)
    }
}

impl<'a> From<&'a Predicate> for UnifiableRef<'a> {
    fn from(p: &'a Predicate) -> Self {
        UnifiableRef::Predicate(p)
    }
}

impl<'a> From<&'a Unifiable> for UnifiableRef<'a> {
    fn from(u: &'a Unifiable) -> Self {
        u.as_ref()
    }
}

pub struct UnifiableDisplay<'a> {
    value: UnifiableRef<'a>,
    interner: &'a Interner,
}

impl<'a> fmt::Display for UnifiableDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            UnifiableRef::Term(t) => write!(f, "{}", t.display(self.interner)),
            UnifiableRef::Predicate(p) => write!(f, "{}", p.display(self.interner)),
        }
    }
}

impl fmt::Display for Unifiable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unifiable::Term(t) => write!(f, "{}", t),
            Unifiable::Predicate(p) => write!(f, "{}", p),
        }
    }
}
