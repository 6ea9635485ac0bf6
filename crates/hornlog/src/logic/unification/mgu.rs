//! Most General Unifier (MGU) computation
//!
//! Unification works against an existing substitution and never mutates it:
//! the result is a new substitution extending the input. Bound variables on
//! either side are replaced by their values before comparison, so the result
//! does not depend on argument order beyond the direction of variable-variable
//! bindings.

use super::substitution::Substitution;
use crate::logic::core::predicate::Predicate;
use crate::logic::core::term::{Term, Variable};
use crate::logic::core::unifiable::{Unifiable, UnifiableRef};
use crate::logic::interner::Symbol;

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Why two expressions failed to unify
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnificationError {
    /// Occurs check failed - variable occurs in the value it would be bound to
    OccursCheck(Variable, Unifiable),
    /// Function or predicate symbols don't match
    SymbolClash(Symbol, Symbol),
    /// Arities don't match
    ArityMismatch(usize, usize),
    /// A function term met a predicate
    KindClash,
}

/// Unify two expressions under `subst`, returning the extended substitution
pub fn unify<'a>(
    a: impl Into<UnifiableRef<'a>>,
    b: impl Into<UnifiableRef<'a>>,
    subst: &Substitution,
) -> UnificationResult {
    let mut theta = subst.clone();
    unify_with_subst(a.into(), b.into(), &mut theta)?;
    Ok(theta)
}

/// Unify `second` and every element of `rest` against `first`, threading one
/// substitution through all of them.
///
/// Each extra argument is unified with `first`, not with its predecessor.
pub fn unify_all<'a>(
    first: UnifiableRef<'a>,
    second: UnifiableRef<'a>,
    rest: &[UnifiableRef<'a>],
) -> UnificationResult {
    let mut theta = unify(first, second, &Substitution::new())?;
    for &other in rest {
        theta = unify(first, other, &theta)?;
    }
    Ok(theta)
}

fn unify_with_subst(
    a: UnifiableRef<'_>,
    b: UnifiableRef<'_>,
    subst: &mut Substitution,
) -> Result<(), UnificationError> {
    // Bound variables unify through their values
    if let Some(v) = a.as_variable() {
        if let Some(bound) = subst.get(&v).cloned() {
            return unify_with_subst(bound.as_ref(), b, subst);
        }
    }
    if let Some(v) = b.as_variable() {
        if let Some(bound) = subst.get(&v).cloned() {
            return unify_with_subst(a, bound.as_ref(), subst);
        }
    }

    match (a, b) {
        (UnifiableRef::Term(Term::Variable(v)), other) => bind(*v, other, subst),
        (other, UnifiableRef::Term(Term::Variable(v))) => bind(*v, other, subst),

        (UnifiableRef::Term(Term::Function(f, xs)), UnifiableRef::Term(Term::Function(g, ys))) => {
            unify_arguments(*f, xs, *g, ys, subst)
        }

        (UnifiableRef::Predicate(p), UnifiableRef::Predicate(q)) => {
            unify_arguments(p.symbol, &p.terms, q.symbol, &q.terms, subst)
        }

        _ => Err(UnificationError::KindClash),
    }
}

/// Bind an unbound variable, unless it already is `value`
fn bind(
    var: Variable,
    value: UnifiableRef<'_>,
    subst: &mut Substitution,
) -> Result<(), UnificationError> {
    if value.as_variable() == Some(var) {
        return Ok(());
    }
    if contains_variable(value, var, subst) {
        return Err(UnificationError::OccursCheck(var, value.to_owned()));
    }
    subst.insert(var, value.to_owned());
    Ok(())
}

/// Shared rule for functions and predicates: same symbol, same arity, then
/// pairwise left to right, stopping at the first failure
fn unify_arguments(
    f: Symbol,
    xs: &[Term],
    g: Symbol,
    ys: &[Term],
    subst: &mut Substitution,
) -> Result<(), UnificationError> {
    if f != g {
        return Err(UnificationError::SymbolClash(f, g));
    }
    if xs.len() != ys.len() {
        return Err(UnificationError::ArityMismatch(xs.len(), ys.len()));
    }
    for (x, y) in xs.iter().zip(ys.iter()) {
        unify_with_subst(UnifiableRef::Term(x), UnifiableRef::Term(y), subst)?;
    }
    Ok(())
}

/// Occurs check: does `var` occur in `expr`, following bindings in `subst`?
pub fn contains_variable(expr: UnifiableRef<'_>, var: Variable, subst: &Substitution) -> bool {
    match expr {
        UnifiableRef::Term(t) => term_contains_variable(t, var, subst),
        UnifiableRef::Predicate(p) => p
            .terms
            .iter()
            .any(|t| term_contains_variable(t, var, subst)),
    }
}

fn term_contains_variable(term: &Term, var: Variable, subst: &Substitution) -> bool {
    match term {
        Term::Variable(v) => {
            if *v == var {
                return true;
            }
            match subst.get(v) {
                Some(bound) => contains_variable(bound.as_ref(), var, subst),
                None => false,
            }
        }
        Term::Function(_, args) => args.iter().any(|arg| term_contains_variable(arg, var, subst)),
    }
}

impl Term {
    /// Unify this term with another under `subst`
    pub fn unify(&self, other: &Term, subst: &Substitution) -> UnificationResult {
        unify(self, other, subst)
    }

    /// Whether `var` occurs in this term under `subst`
    pub fn contains_variable(&self, var: Variable, subst: &Substitution) -> bool {
        term_contains_variable(self, var, subst)
    }
}

impl Predicate {
    /// Unify this predicate with another under `subst`
    pub fn unify(&self, other: &Predicate, subst: &Substitution) -> UnificationResult {
        unify(self, other, subst)
    }

    /// Whether `var` occurs in this predicate under `subst`
    pub fn contains_variable(&self, var: Variable, subst: &Substitution) -> bool {
        contains_variable(UnifiableRef::Predicate(self), var, subst)
    }
}

impl Unifiable {
    /// Unify this expression with another under `subst`
    pub fn unify(&self, other: &Unifiable, subst: &Substitution) -> UnificationResult {
        unify(self, other, subst)
    }
}
