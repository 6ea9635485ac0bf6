//! Error types for hornlog
//!
//! These are contract violations: misuse of the construction or query API by
//! the surrounding system. Unification failure and search exhaustion are
//! ordinary return values and never appear here.

use crate::logic::interner::{Symbol, VariableId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error("Symbol names must not be empty")]
    EmptySymbolName,

    #[error("Horn clause needs a consequent, an antecedent, or both")]
    EmptyClause,

    #[error("Conjunction needs at least one operand")]
    EmptyConjunction,

    #[error("Goal {0} is of an unsupported type for resolution")]
    UnsupportedGoal(String),

    #[error("Variable {0} is already bound")]
    AlreadyBound(VariableId),

    #[error("Variable {0} is not bound")]
    Unbound(VariableId),

    #[error("Binding variable {0} would create a cyclic term")]
    CyclicBinding(VariableId),

    #[error("Arity mismatch for {symbol}: expected {expected}, got {actual}")]
    ArityMismatch {
        symbol: Symbol,
        expected: usize,
        actual: usize,
    },

    #[error("Cannot map arguments to values for constant function {0}")]
    ConstantMapping(Symbol),

    #[error("Rule index {index} out of range for a rule set of {len} rules")]
    RuleIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, LogicError>;
