//! Formulas built from predicates with boolean connectives
//!
//! Only predicates and conjunctions can be resolved against a rule base.
//! Disjunction and negation exist so that front ends can represent them, and
//! the search rejects them explicitly.

use super::predicate::Predicate;
use super::term::Variable;
use crate::error::{LogicError, Result};
use crate::logic::interner::{Interner, VariableId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    Predicate(Predicate),
    /// n-ary conjunction
    And(Vec<Formula>),
    /// n-ary disjunction
    Or(Vec<Formula>),
    Not(Box<Formula>),
}

impl Formula {
    /// Conjunction of `operands`; rejects an empty operand list
    pub fn and(operands: Vec<Formula>) -> Result<Formula> {
        if operands.is_empty() {
            return Err(LogicError::EmptyConjunction);
        }
        Ok(Formula::And(operands))
    }

    pub fn or(operands: Vec<Formula>) -> Formula {
        Formula::Or(operands)
    }

    pub fn not(operand: Formula) -> Formula {
        Formula::Not(Box::new(operand))
    }

    /// Short name of the connective, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Formula::Predicate(_) => "predicate",
            Formula::And(_) => "conjunction",
            Formula::Or(_) => "disjunction",
            Formula::Not(_) => "negation",
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::Predicate(_))
    }

    /// A literal is an atom or a negated atom
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Predicate(_) => true,
            Formula::Not(inner) => inner.is_atomic(),
            _ => false,
        }
    }

    /// First operand of an n-ary connective
    pub fn operator_head(&self) -> Option<&Formula> {
        match self {
            Formula::And(ops) | Formula::Or(ops) => ops.first(),
            _ => None,
        }
    }

    /// The same connective over all but the first operand.
    ///
    /// `None` for non-connectives and for connectives with a single operand.
    pub fn operator_tail(&self) -> Option<Formula> {
        match self {
            Formula::And(ops) if ops.len() > 1 => Some(Formula::And(ops[1..].to_vec())),
            Formula::Or(ops) if ops.len() > 1 => Some(Formula::Or(ops[1..].to_vec())),
            _ => None,
        }
    }

    /// Get all variables in this formula, in order of first appearance
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    pub fn collect_variables(&self, vars: &mut Vec<Variable>) {
        match self {
            Formula::Predicate(p) => p.collect_variables(vars),
            Formula::And(ops) | Formula::Or(ops) => {
                for op in ops {
                    op.collect_variables(vars);
                }
            }
            Formula::Not(inner) => inner.collect_variables(vars),
        }
    }

    /// Copy this formula with its variables renamed through `renaming`
    pub fn standardize_apart(
        &self,
        renaming: &mut HashMap<VariableId, VariableId>,
        interner: &mut Interner,
    ) -> Formula {
        match self {
            Formula::Predicate(p) => Formula::Predicate(p.standardize_apart(renaming, interner)),
            Formula::And(ops) => Formula::And(
                ops.iter()
                    .map(|op| op.standardize_apart(renaming, interner))
                    .collect(),
            ),
            Formula::Or(ops) => Formula::Or(
                ops.iter()
                    .map(|op| op.standardize_apart(renaming, interner))
                    .collect(),
            ),
            Formula::Not(inner) => {
                Formula::Not(Box::new(inner.standardize_apart(renaming, interner)))
            }
        }
    }

    /// Format this formula with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> FormulaDisplay<'a> {
        FormulaDisplay {
            formula: self,
            interner,
        }
    }
}

impl From<Predicate> for Formula {
    fn from(p: Predicate) -> Self {
        Formula::Predicate(p)
    }
}

/// Display wrapper for Formula, Prolog flavoured: `,` for and, `;` for or,
/// `\+` for not
pub struct FormulaDisplay<'a> {
    formula: &'a Formula,
    interner: &'a Interner,
}

impl<'a> FormulaDisplay<'a> {
    fn write_operands(
        &self,
        f: &mut fmt::Formatter<'_>,
        ops: &[Formula],
        separator: &str,
    ) -> fmt::Result {
        for (i, op) in ops.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", separator)?;
            }
            self.write_nested(f, op)?;
        }
        Ok(())
    }

    fn write_nested(&self, f: &mut fmt::Formatter<'_>, op: &Formula) -> fmt::Result {
        match op {
            Formula::And(ops) | Formula::Or(ops) if ops.len() > 1 => {
                write!(f, "({})", op.display(self.interner))
            }
            _ => write!(f, "{}", op.display(self.interner)),
        }
    }
}

impl<'a> fmt::Display for FormulaDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formula {
            Formula::Predicate(p) => write!(f, "{}", p.display(self.interner)),
            Formula::And(ops) => self.write_operands(f, ops, ", "),
            Formula::Or(ops) => self.write_operands(f, ops, "; "),
            Formula::Not(inner) => {
                write!(f, "\\+ ")?;
                self.write_nested(f, inner)
            }
        }
    }
}
