//! Resumable solution nodes for SLD resolution
//!
//! Each node owns the search state for one goal: which rule it is trying,
//! the substitution in effect when it was created, and whatever child nodes
//! it needs to resume a partly explored branch. `next_solution` returns the
//! next substitution satisfying the goal, or `None` once the space under the
//! node is exhausted. An exhausted node stays exhausted until it is reset.

mod and_node;
mod predicate_node;

pub use and_node::AndSolutionNode;
pub use predicate_node::PredicateSolutionNode;

use super::clause::HornClause;
use super::rule_set::RuleSet;
use crate::error::{LogicError, Result};
use crate::logic::core::formula::Formula;
use crate::logic::interner::Interner;
use crate::logic::unification::Substitution;

/// Search node over one goal, dispatched on the goal's shape
#[derive(Debug)]
pub enum SolutionNode<'r> {
    Predicate(PredicateSolutionNode<'r>),
    And(AndSolutionNode<'r>),
}

impl<'r> SolutionNode<'r> {
    /// Build the node that resolves `goal` against `rules`, starting from
    /// `parent`.
    ///
    /// Disjunctions and negations cannot be resolved and are rejected here
    /// rather than reported as having no solutions.
    pub fn new(goal: &Formula, rules: &'r RuleSet, parent: Substitution) -> Result<Self> {
        match goal {
            Formula::Predicate(p) => Ok(SolutionNode::Predicate(PredicateSolutionNode::new(
                p.clone(),
                rules,
                parent,
            ))),
            Formula::And(_) => Ok(SolutionNode::And(AndSolutionNode::new(goal, rules, parent)?)),
            Formula::Or(_) | Formula::Not(_) => {
                Err(LogicError::UnsupportedGoal(goal.kind().to_string()))
            }
        }
    }

    pub fn next_solution(&mut self, interner: &mut Interner) -> Result<Option<Substitution>> {
        match self {
            SolutionNode::Predicate(node) => node.next_solution(interner),
            SolutionNode::And(node) => node.next_solution(interner),
        }
    }

    /// Restart the search under this node from a new parent substitution
    pub fn reset(&mut self, parent: Substitution) {
        match self {
            SolutionNode::Predicate(node) => node.reset(parent),
            SolutionNode::And(node) => node.reset(parent),
        }
    }
}

/// Rule cursor and parent substitution of a node
#[derive(Debug)]
pub(crate) struct NodeState<'r> {
    rule_cursor: usize,
    rules: &'r RuleSet,
    parent_solution: Substitution,
}

impl<'r> NodeState<'r> {
    pub(crate) fn new(rules: &'r RuleSet, parent_solution: Substitution) -> Self {
        NodeState {
            rule_cursor: 0,
            rules,
            parent_solution,
        }
    }

    /// The next rule with fresh variables, or `None` once every rule was tried
    pub(crate) fn next_rule(&mut self, interner: &mut Interner) -> Result<Option<HornClause>> {
        if self.rule_cursor >= self.rules.len() {
            return Ok(None);
        }
        let rule = self.rules.standardized_apart(self.rule_cursor, interner)?;
        self.rule_cursor += 1;
        Ok(Some(rule))
    }

    pub(crate) fn reset(&mut self, parent_solution: Substitution) {
        self.parent_solution = parent_solution;
        self.rule_cursor = 0;
    }

    pub(crate) fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    pub(crate) fn rule_cursor(&self) -> usize {
        self.rule_cursor
    }

    pub(crate) fn parent_solution(&self) -> &Substitution {
        &self.parent_solution
    }
}
