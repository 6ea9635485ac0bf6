//! Driving a search from the outside
//!
//! A [`Query`] owns the root solution node of a goal and the interner the
//! search allocates fresh variables from. Search limits from
//! [`SearchConfig`] are checked before each step, never inside one.

use super::rule_set::RuleSet;
use super::tree::SolutionNode;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::logic::core::formula::Formula;
use crate::logic::interner::Interner;
use crate::logic::unification::Substitution;
use log::debug;
use std::time::{Duration, Instant};

/// Why a query stopped producing solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every branch of the search tree was explored
    Exhausted,
    /// `max_solutions` solutions were returned
    SolutionLimit,
    /// The timeout elapsed
    Timeout,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::Exhausted => "exhausted",
            StopReason::SolutionLimit => "solution_limit",
            StopReason::Timeout => "timeout",
        }
    }
}

pub struct Query<'r, 'i> {
    goal: Formula,
    root: SolutionNode<'r>,
    interner: &'i mut Interner,
    config: SearchConfig,
    solutions: usize,
    started: Instant,
    stop_reason: Option<StopReason>,
}

impl<'r, 'i> Query<'r, 'i> {
    /// Query `goal` against `rules` from the empty substitution
    pub fn new(goal: Formula, rules: &'r RuleSet, interner: &'i mut Interner) -> Result<Self> {
        Self::from_substitution(goal, rules, Substitution::new(), interner)
    }

    /// Query `goal` against `rules` with some variables already bound
    pub fn from_substitution(
        goal: Formula,
        rules: &'r RuleSet,
        initial: Substitution,
        interner: &'i mut Interner,
    ) -> Result<Self> {
        let root = SolutionNode::new(&goal, rules, initial)?;
        Ok(Query {
            goal,
            root,
            interner,
            config: SearchConfig::default(),
            solutions: 0,
            started: Instant::now(),
            stop_reason: None,
        })
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn goal(&self) -> &Formula {
        &self.goal
    }

    pub fn interner(&self) -> &Interner {
        &*self.interner
    }

    /// Number of solutions returned so far
    pub fn solution_count(&self) -> usize {
        self.solutions
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// `None` while the query can still produce solutions
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// The next substitution satisfying the goal.
    ///
    /// Returns `Ok(None)` once the query has stopped, and keeps returning it
    /// on every later call.
    pub fn next_solution(&mut self) -> Result<Option<Substitution>> {
        if self.stop_reason.is_some() {
            return Ok(None);
        }
        if self.config.max_solutions > 0 && self.solutions >= self.config.max_solutions {
            return Ok(self.stop(StopReason::SolutionLimit));
        }
        if let Some(timeout) = self.config.timeout {
            if self.started.elapsed() >= timeout {
                return Ok(self.stop(StopReason::Timeout));
            }
        }

        match self.root.next_solution(self.interner)? {
            Some(solution) => {
                self.solutions += 1;
                debug!(
                    "solution {} for {}: {}",
                    self.solutions,
                    self.goal.display(self.interner),
                    solution.display(self.interner)
                );
                Ok(Some(solution))
            }
            None => Ok(self.stop(StopReason::Exhausted)),
        }
    }

    /// The goal with the next solution applied to it
    pub fn next_answer(&mut self) -> Result<Option<Formula>> {
        Ok(self.next_solution()?.map(|solution| self.goal.apply(&solution)))
    }

    /// Iterate over instantiated goals instead of substitutions
    pub fn answers(&mut self) -> Answers<'_, 'r, 'i> {
        Answers { query: self }
    }

    fn stop(&mut self, reason: StopReason) -> Option<Substitution> {
        debug!(
            "query {} stopped after {} solutions: {:?}",
            self.goal.display(self.interner),
            self.solutions,
            reason
        );
        self.stop_reason = Some(reason);
        None
    }
}

impl<'r, 'i> Iterator for Query<'r, 'i> {
    type Item = Result<Substitution>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution().transpose()
    }
}

/// Iterator over the answers of a [`Query`]
pub struct Answers<'q, 'r, 'i> {
    query: &'q mut Query<'r, 'i>,
}

impl<'q, 'r, 'i> Iterator for Answers<'q, 'r, 'i> {
    type Item = Result<Formula>;

    fn next(&mut self) -> Option<Self::Item> {
        self.query.next_answer().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::core::predicate::Predicate;
    use crate::logic::core::term::Term;
    use crate::proof::clause::HornClause;

    // nat(zero). nat(s(X)) :- nat(X).
    fn naturals(interner: &mut Interner) -> (RuleSet, Formula) {
        let nat = interner.intern("nat").unwrap();
        let s = interner.intern("s").unwrap();
        let zero = Term::constant(interner.intern("zero").unwrap());
        let x = Term::var(interner.new_variable("X").unwrap());
        let rules = RuleSet::new(vec![
            HornClause::fact(Predicate::new(nat, vec![zero])),
            HornClause::rule(
                Predicate::new(nat, vec![Term::function(s, vec![x.clone()])]),
                Predicate::new(nat, vec![x]).into(),
            ),
        ]);
        let n = Term::var(interner.new_variable("N").unwrap());
        (rules, Predicate::new(nat, vec![n]).into())
    }

    #[test]
    fn test_solution_limit_on_infinite_search() {
        let mut interner = Interner::new();
        let (rules, goal) = naturals(&mut interner);
        let config = SearchConfig::default().with_max_solutions(3);
        let mut query = Query::new(goal, &rules, &mut interner)
            .unwrap()
            .with_config(config);

        let answers: Vec<Formula> = query.answers().collect::<Result<_>>().unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(query.stop_reason(), Some(StopReason::SolutionLimit));
        assert_eq!(query.solution_count(), 3);
        assert_eq!(query.next_solution().unwrap(), None);

        let rendered: Vec<String> = answers
            .iter()
            .map(|a| a.display(query.interner()).to_string())
            .collect();
        assert_eq!(rendered, vec!["nat(zero)", "nat(s(zero))", "nat(s(s(zero)))"]);
    }

    #[test]
    fn test_zero_timeout_stops_immediately() {
        let mut interner = Interner::new();
        let (rules, goal) = naturals(&mut interner);
        let config = SearchConfig::default().with_timeout(Duration::ZERO);
        let mut query = Query::new(goal, &rules, &mut interner)
            .unwrap()
            .with_config(config);

        assert_eq!(query.next_solution().unwrap(), None);
        assert_eq!(query.stop_reason(), Some(StopReason::Timeout));
    }

    #[test]
    fn test_exhaustion() {
        let mut interner = Interner::new();
        let p = interner.intern("p").unwrap();
        let rules = RuleSet::new(vec![HornClause::fact(Predicate::proposition(p))]);
        let goal: Formula = Predicate::proposition(p).into();
        let mut query = Query::new(goal, &rules, &mut interner).unwrap();

        assert_eq!(query.stop_reason(), None);
        assert_eq!(query.next_solution().unwrap(), Some(Substitution::new()));
        assert_eq!(query.next_solution().unwrap(), None);
        assert_eq!(query.stop_reason(), Some(StopReason::Exhausted));
        assert!(query.next().is_none());
    }

    #[test]
    fn test_initial_substitution() {
        let mut interner = Interner::new();
        let (rules, goal) = naturals(&mut interner);
        let n = goal.variables()[0];
        let zero = Term::constant(interner.get("zero").unwrap());
        let initial = Substitution::new().extend(n, zero).unwrap();

        let mut query = Query::from_substitution(goal, &rules, initial, &mut interner).unwrap();
        let answer = query.next_answer().unwrap().unwrap();
        assert_eq!(answer.display(query.interner()).to_string(), "nat(zero)");
        assert_eq!(query.next_solution().unwrap(), None);
    }
}
