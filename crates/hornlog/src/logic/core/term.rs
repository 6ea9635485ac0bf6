//! Terms in first-order logic

use crate::logic::interner::{Interner, Symbol, VariableId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A variable in first-order logic
///
/// Identity is the allocation-unique `VariableId`; the display name lives in
/// the interner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub id: VariableId,
}

impl Variable {
    /// Create a new variable from an ID
    pub fn new(id: VariableId) -> Self {
        Variable { id }
    }

    /// Get the display name of this variable from the interner
    pub fn name<'a>(&self, interner: &'a Interner) -> &'a str {
        interner.variable_name(self.id)
    }
}

/// A term in first-order logic
///
/// A function with no arguments is a constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Function(Symbol, Vec<Term>),
}

impl Term {
    /// A term for the variable with this ID
    pub fn var(id: VariableId) -> Self {
        Term::Variable(Variable::new(id))
    }

    /// A constant (0-ary function)
    pub fn constant(symbol: Symbol) -> Self {
        Term::Function(symbol, Vec::new())
    }

    pub fn function(symbol: Symbol, args: Vec<Term>) -> Self {
        Term::Function(symbol, args)
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Function(_, args) if args.is_empty())
    }

    pub fn as_variable(&self) -> Option<Variable> {
        match self {
            Term::Variable(v) => Some(*v),
            Term::Function(_, _) => None,
        }
    }

    /// Number of arguments (0 for variables and constants)
    pub fn arity(&self) -> usize {
        match self {
            Term::Variable(_) => 0,
            Term::Function(_, args) => args.len(),
        }
    }

    /// Get all variables in this term, in order of first appearance
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    /// Append the variables of this term not already in `vars`
    pub fn collect_variables(&self, vars: &mut Vec<Variable>) {
        match self {
            Term::Variable(v) => {
                if !vars.contains(v) {
                    vars.push(*v);
                }
            }
            Term::Function(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// Copy this term with every variable replaced by a fresh one.
    ///
    /// `renaming` is shared across the parts of one clause so that a variable
    /// occurring twice is renamed to the same fresh variable both times.
    pub fn standardize_apart(
        &self,
        renaming: &mut HashMap<VariableId, VariableId>,
        interner: &mut Interner,
    ) -> Term {
        match self {
            Term::Variable(v) => {
                let fresh = *renaming
                    .entry(v.id)
                    .or_insert_with(|| interner.fresh_variable(v.id));
                Term::var(fresh)
            }
            Term::Function(f, args) => Term::Function(
                *f,
                args.iter()
                    .map(|arg| arg.standardize_apart(renaming, interner))
                    .collect(),
            ),
        }
    }

    /// Format this term with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> TermDisplay<'a> {
        TermDisplay {
            term: self,
            interner,
        }
    }
}

impl From<Variable> for Term {
    fn from(v: Variable) -> Self {
        Term::Variable(v)
    }
}

/// Display wrapper for Term that includes an interner for name resolution
pub struct TermDisplay<'a> {
    term: &'a Term,
    interner: &'a Interner,
}

impl<'a> fmt::Display for TermDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.term {
            Term::Variable(v) => write!(f, "{}", v.name(self.interner)),
            Term::Function(func, args) => {
                write!(f, "{}", self.interner.resolve(*func))?;
                if !args.is_empty() {
                    write!(f, "(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", arg.display(self.interner))?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

// Display implementations that show IDs (for debugging without interner)

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Function(func, args) => {
                write!(f, "{}", func)?;
                if !args.is_empty() {
                    write!(f, "(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}
