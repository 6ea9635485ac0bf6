//! The rule base a query is resolved against

use super::clause::HornClause;
use crate::error::{LogicError, Result};
use crate::logic::interner::Interner;
use serde::{Deserialize, Serialize};

/// An ordered, fixed sequence of Horn clauses.
///
/// Rules are tried in order. Each use of a rule during search goes through
/// [`RuleSet::standardized_apart`] so that two uses never share variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<HornClause>,
}

impl RuleSet {
    pub fn new(rules: Vec<HornClause>) -> Self {
        RuleSet { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HornClause> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HornClause> {
        self.rules.iter()
    }

    /// Copy of rule `index` with all of its variables replaced by fresh ones
    pub fn standardized_apart(&self, index: usize, interner: &mut Interner) -> Result<HornClause> {
        let rule = self.rules.get(index).ok_or(LogicError::RuleIndexOutOfRange {
            index,
            len: self.rules.len(),
        })?;
        Ok(rule.standardize_apart(interner))
    }
}

impl FromIterator<HornClause> for RuleSet {
    fn from_iter<I: IntoIterator<Item = HornClause>>(iter: I) -> Self {
        RuleSet::new(iter.into_iter().collect())
    }
}
