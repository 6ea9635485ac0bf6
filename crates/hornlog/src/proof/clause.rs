//! Horn clauses: facts, definite clauses and goal clauses

use crate::error::{LogicError, Result};
use crate::logic::core::formula::Formula;
use crate::logic::core::predicate::Predicate;
use crate::logic::core::term::Variable;
use crate::logic::interner::{Interner, VariableId};
use crate::logic::unification::Substitution;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A clause with an optional head (consequent) and an optional body
/// (antecedent). At least one of the two is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HornClauseParts")]
pub struct HornClause {
    consequent: Option<Predicate>,
    antecedent: Option<Formula>,
}

/// Unchecked serialized form; deserialization goes through `HornClause::new`
#[derive(Deserialize)]
struct HornClauseParts {
    #[serde(default)]
    consequent: Option<Predicate>,
    #[serde(default)]
    antecedent: Option<Formula>,
}

impl TryFrom<HornClauseParts> for HornClause {
    type Error = LogicError;

    fn try_from(parts: HornClauseParts) -> Result<Self> {
        HornClause::new(parts.consequent, parts.antecedent)
    }
}

impl HornClause {
    pub fn new(consequent: Option<Predicate>, antecedent: Option<Formula>) -> Result<Self> {
        if consequent.is_none() && antecedent.is_none() {
            return Err(LogicError::EmptyClause);
        }
        Ok(HornClause {
            consequent,
            antecedent,
        })
    }

    /// `head.`
    pub fn fact(head: Predicate) -> Self {
        HornClause {
            consequent: Some(head),
            antecedent: None,
        }
    }

    /// `head :- body.`
    pub fn rule(head: Predicate, body: Formula) -> Self {
        HornClause {
            consequent: Some(head),
            antecedent: Some(body),
        }
    }

    /// `:- body.`
    pub fn goal(body: Formula) -> Self {
        HornClause {
            consequent: None,
            antecedent: Some(body),
        }
    }

    pub fn consequent(&self) -> Option<&Predicate> {
        self.consequent.as_ref()
    }

    pub fn antecedent(&self) -> Option<&Formula> {
        self.antecedent.as_ref()
    }

    pub fn is_fact(&self) -> bool {
        self.consequent.is_some() && self.antecedent.is_none()
    }

    pub fn is_definite_clause(&self) -> bool {
        self.consequent.is_some() && self.antecedent.is_some()
    }

    pub fn is_goal_clause(&self) -> bool {
        self.consequent.is_none() && self.antecedent.is_some()
    }

    /// Variables of head then body, in order of first appearance
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        if let Some(head) = &self.consequent {
            head.collect_variables(&mut vars);
        }
        if let Some(body) = &self.antecedent {
            body.collect_variables(&mut vars);
        }
        vars
    }

    pub fn apply(&self, subst: &Substitution) -> HornClause {
        HornClause {
            consequent: self.consequent.as_ref().map(|p| p.apply(subst)),
            antecedent: self.antecedent.as_ref().map(|f| f.apply(subst)),
        }
    }

    /// Copy this clause with every variable replaced by a fresh one. Head and
    /// body share one renaming, so a variable keeps its identity across both.
    pub fn standardize_apart(&self, interner: &mut Interner) -> HornClause {
        let mut renaming: HashMap<VariableId, VariableId> = HashMap::new();
        HornClause {
            consequent: self
                .consequent
                .as_ref()
                .map(|p| p.standardize_apart(&mut renaming, interner)),
            antecedent: self
                .antecedent
                .as_ref()
                .map(|f| f.standardize_apart(&mut renaming, interner)),
        }
    }

    pub fn display<'a>(&'a self, interner: &'a Interner) -> HornClauseDisplay<'a> {
        HornClauseDisplay {
            clause: self,
            interner,
        }
    }
}

/// Prolog notation: `head`, `head :- body` or `:- body`
pub struct HornClauseDisplay<'a> {
    clause: &'a HornClause,
    interner: &'a Interner,
}

impl<'a> fmt::Display for HornClauseDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.clause.consequent, &self.clause.antecedent) {
            (Some(head), None) => write!(f, "{}", head.display(self.interner)),
            (Some(head), Some(body)) => write!(
                f,
                "{} :- {}",
                head.display(self.interner),
                body.display(self.interner)
            ),
            (None, Some(body)) => write!(f, ":- {}", body.display(self.interner)),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::core::term::Term;

    struct Fixture {
        interner: Interner,
        x: Term,
        y: Term,
        z: Term,
        ancestor_rule: HornClause,
    }

    // ancestor(X,Y) :- parent(X,Z), ancestor(Z,Y)
    fn fixture() -> Fixture {
        let mut interner = Interner::new();
        let parent = interner.intern("parent").unwrap();
        let ancestor = interner.intern("ancestor").unwrap();
        let x = Term::var(interner.new_variable("X").unwrap());
        let y = Term::var(interner.new_variable("Y").unwrap());
        let z = Term::var(interner.new_variable("Z").unwrap());
        let body = Formula::and(vec![
            Predicate::new(parent, vec![x.clone(), z.clone()]).into(),
            Predicate::new(ancestor, vec![z.clone(), y.clone()]).into(),
        ])
        .unwrap();
        let ancestor_rule =
            HornClause::rule(Predicate::new(ancestor, vec![x.clone(), y.clone()]), body);
        Fixture {
            interner,
            x,
            y,
            z,
            ancestor_rule,
        }
    }

    #[test]
    fn test_empty_clause_rejected() {
        assert_eq!(HornClause::new(None, None), Err(LogicError::EmptyClause));
    }

    #[test]
    fn test_deserialize_rejects_empty_clause() {
        let err = serde_json::from_str::<HornClause>(r#"{"consequent":null,"antecedent":null}"#)
            .unwrap_err();
        assert!(err.to_string().contains("consequent, an antecedent, or both"));
        assert!(serde_json::from_str::<HornClause>("{}").is_err());
    }

    #[test]
    fn test_serde_keeps_valid_clauses() {
        let f = fixture();
        let json = serde_json::to_string(&f.ancestor_rule).unwrap();
        let back: HornClause = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f.ancestor_rule);
        assert!(back.is_definite_clause());
    }

    #[test]
    fn test_classification() {
        let mut interner = Interner::new();
        let p = Predicate::proposition(interner.intern("p").unwrap());
        let body = Formula::Predicate(p.clone());

        let fact = HornClause::new(Some(p.clone()), None).unwrap();
        assert!(fact.is_fact());
        assert!(!fact.is_definite_clause() && !fact.is_goal_clause());

        let rule = HornClause::new(Some(p.clone()), Some(body.clone())).unwrap();
        assert!(rule.is_definite_clause());
        assert!(!rule.is_fact() && !rule.is_goal_clause());

        let goal = HornClause::new(None, Some(body)).unwrap();
        assert!(goal.is_goal_clause());
        assert!(!goal.is_fact() && !goal.is_definite_clause());
        assert_eq!(goal.consequent(), None);
    }

    #[test]
    fn test_display() {
        let f = fixture();
        assert_eq!(
            f.ancestor_rule.display(&f.interner).to_string(),
            "ancestor(X,Y) :- parent(X,Z), ancestor(Z,Y)"
        );

        let head = f.ancestor_rule.consequent().unwrap().clone();
        let body = f.ancestor_rule.antecedent().unwrap().clone();
        assert_eq!(
            HornClause::fact(head).display(&f.interner).to_string(),
            "ancestor(X,Y)"
        );
        assert_eq!(
            HornClause::goal(body).display(&f.interner).to_string(),
            ":- parent(X,Z), ancestor(Z,Y)"
        );
    }

    #[test]
    fn test_standardize_apart_shares_renaming() {
        let mut f = fixture();
        let renamed = f.ancestor_rule.standardize_apart(&mut f.interner);

        let original_vars = f.ancestor_rule.variables();
        let renamed_vars = renamed.variables();
        assert_eq!(original_vars.len(), 3);
        assert_eq!(renamed_vars.len(), 3);
        for v in &renamed_vars {
            assert!(!original_vars.contains(v));
        }

        // Display names survive renaming
        assert_eq!(
            renamed.display(&f.interner).to_string(),
            "ancestor(X,Y) :- parent(X,Z), ancestor(Z,Y)"
        );
        // X in the head and X in the body are still one variable
        let head_x = renamed.consequent().unwrap().terms[0].clone();
        let body_head = renamed.antecedent().unwrap().operator_head().unwrap();
        match body_head {
            Formula::Predicate(p) => assert_eq!(p.terms[0], head_x),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_apply() {
        let mut f = fixture();
        let charles = Term::constant(f.interner.intern("charles").unwrap());
        let joe = Term::constant(f.interner.intern("joe").unwrap());
        let x = f.x.as_variable().unwrap();
        let z = f.z.as_variable().unwrap();
        let subst = Substitution::new()
            .extend(x, charles)
            .unwrap()
            .extend(z, joe)
            .unwrap();

        let applied = f.ancestor_rule.apply(&subst);
        assert_eq!(
            applied.display(&f.interner).to_string(),
            "ancestor(charles,Y) :- parent(charles,joe), ancestor(joe,Y)"
        );
        assert_eq!(applied.variables(), vec![f.y.as_variable().unwrap()]);
    }
}
