//! JSON serialization types for terms, clauses and query answers

use crate::error::Result;
use crate::logic::core::formula::Formula;
use crate::logic::core::predicate::Predicate;
use crate::logic::core::term::{Term, Variable};
use crate::logic::core::unifiable::Unifiable;
use crate::logic::interner::Interner;
use crate::logic::unification::Substitution;
use crate::proof::clause::HornClause;
use crate::proof::query::Query;
use serde::{Deserialize, Serialize};

/// JSON representation of a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TermJson {
    Variable { name: String },
    Constant { name: String },
    Function { name: String, args: Vec<TermJson> },
}

impl TermJson {
    pub fn from_term(term: &Term, interner: &Interner) -> Self {
        match term {
            Term::Variable(v) => TermJson::Variable {
                name: v.name(interner).to_string(),
            },
            Term::Function(f, args) if args.is_empty() => TermJson::Constant {
                name: interner.resolve(*f).to_string(),
            },
            Term::Function(f, args) => TermJson::Function {
                name: interner.resolve(*f).to_string(),
                args: args.iter().map(|t| TermJson::from_term(t, interner)).collect(),
            },
        }
    }
}

/// JSON representation of a predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredicateJson {
    pub predicate: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TermJson>,
}

impl PredicateJson {
    pub fn from_predicate(pred: &Predicate, interner: &Interner) -> Self {
        PredicateJson {
            predicate: interner.resolve(pred.symbol).to_string(),
            args: pred.terms.iter().map(|t| TermJson::from_term(t, interner)).collect(),
        }
    }
}

/// JSON representation of a formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormulaJson {
    Predicate(PredicateJson),
    And { operands: Vec<FormulaJson> },
    Or { operands: Vec<FormulaJson> },
    Not { operand: Box<FormulaJson> },
}

impl FormulaJson {
    pub fn from_formula(formula: &Formula, interner: &Interner) -> Self {
        let all = |ops: &[Formula]| -> Vec<FormulaJson> {
            ops.iter().map(|op| FormulaJson::from_formula(op, interner)).collect()
        };
        match formula {
            Formula::Predicate(p) => {
                FormulaJson::Predicate(PredicateJson::from_predicate(p, interner))
            }
            Formula::And(ops) => FormulaJson::And { operands: all(ops) },
            Formula::Or(ops) => FormulaJson::Or { operands: all(ops) },
            Formula::Not(inner) => FormulaJson::Not {
                operand: Box::new(FormulaJson::from_formula(inner, interner)),
            },
        }
    }
}

/// JSON representation of a Horn clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HornClauseJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<PredicateJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<FormulaJson>,
    /// Prolog notation of the whole clause
    pub text: String,
}

impl HornClauseJson {
    pub fn from_clause(clause: &HornClause, interner: &Interner) -> Self {
        HornClauseJson {
            head: clause
                .consequent()
                .map(|p| PredicateJson::from_predicate(p, interner)),
            body: clause
                .antecedent()
                .map(|f| FormulaJson::from_formula(f, interner)),
            text: clause.display(interner).to_string(),
        }
    }
}

/// A variable binding; the value is a term or, rarely, a predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingJson {
    pub variable: String,
    pub value: String,
}

/// JSON representation of one answer to a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerJson {
    /// The goal with the solution applied
    pub answer: FormulaJson,
    pub text: String,
    /// Bindings of the goal's variables, sorted by variable name
    pub bindings: Vec<BindingJson>,
}

impl AnswerJson {
    pub fn from_solution(goal: &Formula, solution: &Substitution, interner: &Interner) -> Self {
        let answer = goal.apply(solution);
        let mut resolved: Vec<(Variable, Unifiable)> = solution.resolve_all(&goal.variables());
        resolved.sort_by(|(a, _), (b, _)| {
            interner.compare(
                interner.variable_symbol(a.id),
                interner.variable_symbol(b.id),
            )
        });
        AnswerJson {
            answer: FormulaJson::from_formula(&answer, interner),
            text: answer.display(interner).to_string(),
            bindings: resolved
                .iter()
                .map(|(var, value)| BindingJson {
                    variable: var.name(interner).to_string(),
                    value: value.display(interner).to_string(),
                })
                .collect(),
        }
    }
}

/// JSON representation of a finished query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResultJson {
    pub goal: String,
    pub answers: Vec<AnswerJson>,
    /// `exhausted`, `solution_limit` or `timeout`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped: Option<String>,
    pub time_seconds: f64,
}

impl QueryResultJson {
    /// Run `query` until it stops and collect every answer it still produces.
    ///
    /// Recursive programs can have infinitely many answers, and with the
    /// default [`SearchConfig`](crate::SearchConfig) such a query never stops.
    /// Give the query a `max_solutions` limit or a timeout unless the
    /// program is known to be finite.
    pub fn from_query(query: &mut Query<'_, '_>) -> Result<Self> {
        let mut answers = Vec::new();
        while let Some(solution) = query.next_solution()? {
            answers.push(AnswerJson::from_solution(
                query.goal(),
                &solution,
                query.interner(),
            ));
        }
        Ok(QueryResultJson {
            goal: query.goal().display(query.interner()).to_string(),
            answers,
            stopped: query.stop_reason().map(|r| r.as_str().to_string()),
            time_seconds: query.elapsed().as_secs_f64(),
        })
    }
}
