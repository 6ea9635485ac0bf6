//! Resolution of a conjunction, head first

use super::SolutionNode;
use crate::error::{LogicError, Result};
use crate::logic::core::formula::Formula;
use crate::logic::interner::Interner;
use crate::logic::unification::Substitution;
use crate::proof::rule_set::RuleSet;
use log::trace;

/// Solves `head ∧ tail` where `tail` is the conjunction of the remaining
/// operands.
///
/// For every solution of the head, the tail is solved under that solution.
/// When the tail runs out the head is asked for its next solution, which is
/// where backtracking into earlier choices happens.
#[derive(Debug)]
pub struct AndSolutionNode<'r> {
    rules: &'r RuleSet,
    head: Box<SolutionNode<'r>>,
    tail_goal: Option<Formula>,
    tail: Option<Box<SolutionNode<'r>>>,
}

impl<'r> AndSolutionNode<'r> {
    pub(crate) fn new(goal: &Formula, rules: &'r RuleSet, parent: Substitution) -> Result<Self> {
        let head_goal = goal.operator_head().ok_or(LogicError::EmptyConjunction)?;
        let head = SolutionNode::new(head_goal, rules, parent)?;
        Ok(AndSolutionNode {
            rules,
            head: Box::new(head),
            tail_goal: goal.operator_tail(),
            tail: None,
        })
    }

    pub fn head_node(&self) -> &SolutionNode<'r> {
        &self.head
    }

    /// Node over the remaining operands, once the head has produced a solution
    pub fn tail_node(&self) -> Option<&SolutionNode<'r>> {
        self.tail.as_deref()
    }

    pub fn tail_goal(&self) -> Option<&Formula> {
        self.tail_goal.as_ref()
    }

    pub fn next_solution(&mut self, interner: &mut Interner) -> Result<Option<Substitution>> {
        // More tail solutions under the current head solution come first
        if let Some(tail) = self.tail.as_mut() {
            if let Some(solution) = tail.next_solution(interner)? {
                return Ok(Some(solution));
            }
        }

        while let Some(head_solution) = self.head.next_solution(interner)? {
            let Some(tail_goal) = &self.tail_goal else {
                return Ok(Some(head_solution));
            };

            if let Some(tail) = self.tail.as_mut() {
                tail.reset(head_solution);
            } else {
                let node = SolutionNode::new(tail_goal, self.rules, head_solution)?;
                self.tail = Some(Box::new(node));
            }

            if let Some(tail) = self.tail.as_mut() {
                if let Some(solution) = tail.next_solution(interner)? {
                    return Ok(Some(solution));
                }
            }
            trace!(
                "no solution for {} under this head solution, backtracking",
                tail_goal.display(interner)
            );
        }

        Ok(None)
    }

    pub(crate) fn reset(&mut self, parent: Substitution) {
        self.head.reset(parent);
        self.tail = None;
    }
}
