//! Horn clause programs and the SLD search over them

pub mod clause;
pub mod query;
pub mod rule_set;
pub mod tree;

pub use clause::{HornClause, HornClauseDisplay};
pub use query::{Answers, Query, StopReason};
pub use rule_set::RuleSet;
pub use tree::{AndSolutionNode, PredicateSolutionNode, SolutionNode};
