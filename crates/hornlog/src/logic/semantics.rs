//! Interpretations of function symbols over ground terms
//!
//! A `FunctionInterpretation` is the graph of one n-ary function: a finite
//! table from argument tuples to values. Constants are their own
//! interpretation and have no table.

use crate::error::{LogicError, Result};
use crate::logic::core::term::Term;
use crate::logic::interner::Symbol;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInterpretation {
    function: Symbol,
    arity: usize,
    graph: HashMap<Vec<Term>, Term>,
}

impl FunctionInterpretation {
    pub fn new(function: Symbol, arity: usize) -> Self {
        FunctionInterpretation {
            function,
            arity,
            graph: HashMap::new(),
        }
    }

    /// Interpretation for the head symbol and arity of `term`, or `None` for a
    /// variable
    pub fn for_term(term: &Term) -> Option<Self> {
        match term {
            Term::Function(f, args) => Some(Self::new(*f, args.len())),
            Term::Variable(_) => None,
        }
    }

    pub fn function(&self) -> Symbol {
        self.function
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn is_constant(&self) -> bool {
        self.arity == 0
    }

    /// Number of argument tuples with a value
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Record `args ↦ value`, replacing any earlier value for the same tuple
    pub fn map(&mut self, value: Term, args: Vec<Term>) -> Result<()> {
        if self.is_constant() {
            return Err(LogicError::ConstantMapping(self.function));
        }
        self.check_arity(args.len())?;
        self.graph.insert(args, value);
        Ok(())
    }

    /// Value of the function at `args`.
    ///
    /// A constant evaluates to itself. `Ok(None)` means the tuple has no value
    /// in this interpretation.
    pub fn evaluate(&self, args: &[Term]) -> Result<Option<Term>> {
        self.check_arity(args.len())?;
        if self.is_constant() {
            return Ok(Some(Term::constant(self.function)));
        }
        Ok(self.graph.get(args).cloned())
    }

    fn check_arity(&self, actual: usize) -> Result<()> {
        if actual != self.arity {
            return Err(LogicError::ArityMismatch {
                symbol: self.function,
                expected: self.arity,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::interner::Interner;

    #[test]
    fn test_map_and_evaluate() {
        let mut interner = Interner::new();
        let father = interner.intern("father_of").unwrap();
        let bill = Term::constant(interner.intern("bill").unwrap());
        let maria = Term::constant(interner.intern("maria").unwrap());
        let joe = Term::constant(interner.intern("joe").unwrap());

        let mut interp = FunctionInterpretation::new(father, 1);
        interp.map(maria.clone(), vec![bill.clone()]).unwrap();
        interp.map(joe.clone(), vec![maria.clone()]).unwrap();

        assert_eq!(interp.len(), 2);
        assert_eq!(interp.evaluate(&[bill]).unwrap(), Some(maria.clone()));
        assert_eq!(interp.evaluate(&[maria]).unwrap(), Some(joe.clone()));
        assert_eq!(interp.evaluate(&[joe]).unwrap(), None);
    }

    #[test]
    fn test_remap_replaces_value() {
        let mut interner = Interner::new();
        let f = interner.intern("f").unwrap();
        let a = Term::constant(interner.intern("a").unwrap());
        let b = Term::constant(interner.intern("b").unwrap());

        let mut interp = FunctionInterpretation::new(f, 1);
        interp.map(a.clone(), vec![a.clone()]).unwrap();
        interp.map(b.clone(), vec![a.clone()]).unwrap();
        assert_eq!(interp.len(), 1);
        assert_eq!(interp.evaluate(&[a]).unwrap(), Some(b));
    }

    #[test]
    fn test_constant_interpretation() {
        let mut interner = Interner::new();
        let c = interner.intern("c").unwrap();
        let constant = Term::constant(c);

        let mut interp = FunctionInterpretation::for_term(&constant).unwrap();
        assert!(interp.is_constant());
        assert_eq!(interp.evaluate(&[]).unwrap(), Some(constant.clone()));
        assert_eq!(
            interp.map(constant.clone(), vec![]),
            Err(LogicError::ConstantMapping(c))
        );
    }

    #[test]
    fn test_arity_checked() {
        let mut interner = Interner::new();
        let f = interner.intern("f").unwrap();
        let a = Term::constant(interner.intern("a").unwrap());

        let mut interp = FunctionInterpretation::new(f, 2);
        let expected = LogicError::ArityMismatch {
            symbol: f,
            expected: 2,
            actual: 1,
        };
        assert_eq!(interp.map(a.clone(), vec![a.clone()]), Err(expected.clone()));
        assert_eq!(interp.evaluate(&[a]), Err(expected));

        let x = Term::var(interner.new_variable("X").unwrap());
        assert!(FunctionInterpretation::for_term(&x).is_none());
    }
}
