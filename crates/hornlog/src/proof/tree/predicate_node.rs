//! Resolution of a single predicate goal

use super::{NodeState, SolutionNode};
use crate::error::Result;
use crate::logic::core::predicate::Predicate;
use crate::logic::interner::Interner;
use crate::logic::unification::Substitution;
use crate::proof::rule_set::RuleSet;
use log::{debug, trace};

/// Tries each rule of the rule set in order against one predicate goal.
///
/// A fact whose head unifies with the goal yields the unifier directly. A
/// rule whose head unifies spawns a child node over its body, which is
/// drained before the next rule is tried.
#[derive(Debug)]
pub struct PredicateSolutionNode<'r> {
    goal: Predicate,
    state: NodeState<'r>,
    child: Option<Box<SolutionNode<'r>>>,
}

impl<'r> PredicateSolutionNode<'r> {
    pub(crate) fn new(goal: Predicate, rules: &'r RuleSet, parent: Substitution) -> Self {
        PredicateSolutionNode {
            goal,
            state: NodeState::new(rules, parent),
            child: None,
        }
    }

    pub fn goal(&self) -> &Predicate {
        &self.goal
    }

    pub fn parent_solution(&self) -> &Substitution {
        self.state.parent_solution()
    }

    /// Number of rules tried so far
    pub fn rule_cursor(&self) -> usize {
        self.state.rule_cursor()
    }

    /// Whether a rule body is still being explored
    pub fn has_child(&self) -> bool {
        self.child.is_some()
    }

    pub fn next_solution(&mut self, interner: &mut Interner) -> Result<Option<Substitution>> {
        // Resume the body of the rule chosen last time
        if let Some(child) = self.child.as_mut() {
            if let Some(solution) = child.next_solution(interner)? {
                return Ok(Some(solution));
            }
        }
        self.child = None;

        while let Some(rule) = self.state.next_rule(interner)? {
            let Some(head) = rule.consequent() else {
                trace!("skipping goal clause {}", rule.display(interner));
                continue;
            };

            let unifier = match self.goal.unify(head, self.state.parent_solution()) {
                Ok(unifier) => unifier,
                Err(err) => {
                    trace!(
                        "{} does not unify with {}: {:?}",
                        self.goal.display(interner),
                        head.display(interner),
                        err
                    );
                    continue;
                }
            };

            let Some(body) = rule.antecedent() else {
                debug!(
                    "{} solved by fact {}",
                    self.goal.display(interner),
                    head.display(interner)
                );
                return Ok(Some(unifier));
            };

            trace!(
                "{} resolving body of {}",
                self.goal.display(interner),
                rule.display(interner)
            );
            let mut child = SolutionNode::new(body, self.state.rules(), unifier)?;
            let first = child.next_solution(interner)?;
            self.child = Some(Box::new(child));
            if first.is_some() {
                return Ok(first);
            }
            self.child = None;
        }

        trace!("{} exhausted", self.goal.display(interner));
        Ok(None)
    }

    pub(crate) fn reset(&mut self, parent: Substitution) {
        self.state.reset(parent);
        self.child = None;
    }
}
