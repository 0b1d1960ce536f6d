//! Quantifier instantiation with fresh constants registered in an interpretation.

use super::{not_possible, InferenceRule};
use crate::error::{LogicError, Result};
use crate::normalize::witness_map;
use crate::semantics::{read, ElementId, Function, Interpretation, VariableAssignment};
use crate::syntax::{fresh_name, FnSym, QuantifierKind, Sentence, Term, Var};
use crate::unify::Substitution;

/// Bound variable and body of a premise whose root is a quantifier of `kind`.
fn quantified(premises: &[Sentence], kind: QuantifierKind) -> Option<(Var, Sentence)> {
    let premise = premises.first()?;
    let root = premise.root();
    let quant = premise.quantifier_of(root).filter(|q| q.kind == kind)?;
    Some((quant.var.clone(), premise.subtree(premise.p(root)?)))
}

/// Register a fresh constant denoting `element` (or nothing) and substitute it for `var` in `body`.
fn instantiate(
    interpretation: &mut Interpretation,
    var: Var,
    element: Option<ElementId>,
    mut body: Sentence,
) -> Sentence {
    let constant = FnSym::new(fresh_name("c"), 0);
    let mapping = match element {
        Some(e) => vec![(Vec::new(), e)],
        None => {
            log::warn!("no element for {}; constant {} is left undefined", var, constant);
            Vec::new()
        }
    };
    interpretation.register_function(constant.clone(), Function::new(mapping));
    log::debug!("instantiating {} as {}", var, constant.name);
    Substitution::singleton(var, Term::App(constant, Vec::new())).apply(&mut body);
    body
}

/// `∃x F ⊢ F[x/c]`, where `c` denotes the witness found by evaluating the premise.
#[derive(Debug)]
pub struct ExistentialInstantiation<'a> {
    pub interpretation: &'a mut Interpretation,
    pub assignment: &'a VariableAssignment,
}

impl InferenceRule for ExistentialInstantiation<'_> {
    fn name(&self) -> &'static str {
        "existential instantiation"
    }

    fn is_possible(&self, premises: &[Sentence]) -> bool {
        quantified(premises, QuantifierKind::Existential).is_some()
    }

    fn conclude(&mut self, premises: &[Sentence]) -> Result<Sentence> {
        let (var, body) = quantified(premises, QuantifierKind::Existential)
            .ok_or_else(|| not_possible(&*self, premises))?;
        let witness = witness_map(&premises[0], self.interpretation, self.assignment)
            .get(&var)
            .copied();
        Ok(instantiate(self.interpretation, var, witness, body))
    }
}

/// `∀x F ⊢ F[x/c]`, where `c` denotes a chosen element.
#[derive(Debug)]
pub struct UniversalInstantiation<'a> {
    pub interpretation: &'a mut Interpretation,
    pub element: ElementId,
}

impl InferenceRule for UniversalInstantiation<'_> {
    fn name(&self) -> &'static str {
        "universal instantiation"
    }

    fn is_possible(&self, premises: &[Sentence]) -> bool {
        quantified(premises, QuantifierKind::Universal).is_some()
    }

    fn conclude(&mut self, premises: &[Sentence]) -> Result<Sentence> {
        let (var, body) = quantified(premises, QuantifierKind::Universal)
            .ok_or_else(|| not_possible(&*self, premises))?;
        let known = read(self.interpretation.structure())
            .universe()
            .element(self.element)
            .map(|e| e.id());
        match known {
            Ok(element) => Ok(instantiate(self.interpretation, var, Some(element), body)),
            Err(err) => {
                log::warn!("cannot instantiate {} with element {}: {}", var, self.element, err);
                Err(LogicError::ElementNotFound(self.element))
            }
        }
    }
}
