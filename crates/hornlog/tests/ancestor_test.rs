//! End-to-end resolution over a family tree

use hornlog::json::{AnswerJson, HornClauseJson, QueryResultJson};
use hornlog::{
    Formula, HornClause, Interner, Predicate, Query, RuleSet, SearchConfig, SolutionNode,
    StopReason, Substitution, Term,
};
use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Family {
    interner: Interner,
    rules: RuleSet,
    ancestor: hornlog::Symbol,
}

/// parent(bill,audrey). parent(maria,bill). parent(joe,maria).
/// parent(charles,joe).
/// ancestor(X,Y) :- parent(X,Y).
/// ancestor(X,Y) :- parent(X,Z), ancestor(Z,Y).
fn family() -> Family {
    let mut interner = Interner::new();
    let parent = interner.intern("parent").unwrap();
    let ancestor = interner.intern("ancestor").unwrap();

    let mut facts = Vec::new();
    for (p, c) in [
        ("bill", "audrey"),
        ("maria", "bill"),
        ("joe", "maria"),
        ("charles", "joe"),
    ] {
        let p = Term::constant(interner.intern(p).unwrap());
        let c = Term::constant(interner.intern(c).unwrap());
        facts.push(HornClause::fact(Predicate::new(parent, vec![p, c])));
    }

    let x = Term::var(interner.new_variable("X").unwrap());
    let y = Term::var(interner.new_variable("Y").unwrap());
    let z = Term::var(interner.new_variable("Z").unwrap());
    let direct = HornClause::rule(
        Predicate::new(ancestor, vec![x.clone(), y.clone()]),
        Predicate::new(parent, vec![x.clone(), y.clone()]).into(),
    );
    let transitive = HornClause::rule(
        Predicate::new(ancestor, vec![x.clone(), y.clone()]),
        Formula::and(vec![
            Predicate::new(parent, vec![x, z.clone()]).into(),
            Predicate::new(ancestor, vec![z, y]).into(),
        ])
        .unwrap(),
    );

    facts.push(direct);
    facts.push(transitive);
    Family {
        interner,
        rules: RuleSet::new(facts),
        ancestor,
    }
}

fn ancestors_of(f: &mut Family, who: &str) -> (Formula, Term) {
    let who = Term::constant(f.interner.intern(who).unwrap());
    let y = Term::var(f.interner.new_variable("Y").unwrap());
    let goal = Predicate::new(f.ancestor, vec![who, y.clone()]).into();
    (goal, y)
}

#[test]
fn test_descendants_of_charles() {
    init_logging();
    let mut f = family();
    let (goal, y) = ancestors_of(&mut f, "charles");
    let mut root = SolutionNode::new(&goal, &f.rules, Substitution::new()).unwrap();

    let mut found = Vec::new();
    while let Some(solution) = root.next_solution(&mut f.interner).unwrap() {
        found.push(y.apply(&solution).display(&f.interner).to_string());
    }

    // Depth first, direct rule before the transitive one
    assert_eq!(found, vec!["joe", "maria", "bill", "audrey"]);
    let unique: HashSet<&String> = found.iter().collect();
    assert_eq!(unique.len(), 4);

    // Exhausted nodes stay exhausted
    for _ in 0..3 {
        assert_eq!(root.next_solution(&mut f.interner).unwrap(), None);
    }
}

#[test]
fn test_leaf_has_no_descendants() {
    init_logging();
    let mut f = family();
    let (goal, _) = ancestors_of(&mut f, "audrey");
    let mut query = Query::new(goal, &f.rules, &mut f.interner).unwrap();

    assert_eq!(query.next_solution().unwrap(), None);
    assert_eq!(query.stop_reason(), Some(StopReason::Exhausted));
}

#[test]
fn test_resumption_matches_full_run() {
    init_logging();
    let mut f = family();

    let (goal, _) = ancestors_of(&mut f, "charles");
    let full: Vec<Formula> = {
        let mut query = Query::new(goal.clone(), &f.rules, &mut f.interner).unwrap();
        query.answers().collect::<hornlog::Result<_>>().unwrap()
    };

    // Two solutions, pause, then the rest from the same query
    let mut query = Query::new(goal, &f.rules, &mut f.interner).unwrap();
    let mut resumed = Vec::new();
    for _ in 0..2 {
        resumed.push(query.next_answer().unwrap().unwrap());
    }
    assert_eq!(query.stop_reason(), None);
    while let Some(answer) = query.next_answer().unwrap() {
        resumed.push(answer);
    }

    assert_eq!(full.len(), 4);
    assert_eq!(resumed, full);
}

#[test]
fn test_query_both_arguments_open() {
    init_logging();
    let mut f = family();
    let a = Term::var(f.interner.new_variable("A").unwrap());
    let d = Term::var(f.interner.new_variable("D").unwrap());
    let goal: Formula = Predicate::new(f.ancestor, vec![a, d]).into();
    let mut query = Query::new(goal, &f.rules, &mut f.interner).unwrap();

    let answers: Vec<Formula> = query.answers().collect::<hornlog::Result<_>>().unwrap();
    let rendered: HashSet<String> = answers
        .iter()
        .map(|answer| answer.display(query.interner()).to_string())
        .collect();

    // Every pair along the chain charles > joe > maria > bill > audrey
    assert_eq!(answers.len(), 10);
    assert_eq!(rendered.len(), 10);
    assert!(rendered.contains("ancestor(charles,audrey)"));
    assert!(rendered.contains("ancestor(bill,audrey)"));
    assert!(!rendered.contains("ancestor(audrey,bill)"));
}

#[test]
fn test_solution_limit() {
    init_logging();
    let mut f = family();
    let (goal, _) = ancestors_of(&mut f, "charles");
    let mut query = Query::new(goal, &f.rules, &mut f.interner)
        .unwrap()
        .with_config(SearchConfig::default().with_max_solutions(2));

    assert_eq!(query.by_ref().count(), 2);
    assert_eq!(query.stop_reason(), Some(StopReason::SolutionLimit));
}

#[test]
fn test_json_rendering() {
    init_logging();
    let mut f = family();
    let (goal, _) = ancestors_of(&mut f, "maria");

    let transitive = f.rules.get(5).unwrap();
    let clause = HornClauseJson::from_clause(transitive, &f.interner);
    assert_eq!(clause.text, "ancestor(X,Y) :- parent(X,Z), ancestor(Z,Y)");
    assert_eq!(clause.head.as_ref().unwrap().predicate, "ancestor");

    let mut query = Query::new(goal, &f.rules, &mut f.interner).unwrap();
    let result = QueryResultJson::from_query(&mut query).unwrap();
    assert_eq!(result.goal, "ancestor(maria,Y)");
    assert_eq!(result.stopped.as_deref(), Some("exhausted"));
    let texts: Vec<&str> = result.answers.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, vec!["ancestor(maria,bill)", "ancestor(maria,audrey)"]);

    let first: &AnswerJson = &result.answers[0];
    assert_eq!(first.bindings.len(), 1);
    assert_eq!(first.bindings[0].variable, "Y");
    assert_eq!(first.bindings[0].value, "bill");

    let value = serde_json::to_value(first).unwrap();
    assert_eq!(value["answer"]["type"], "predicate");
    assert_eq!(value["answer"]["args"][1]["name"], "bill");
}
