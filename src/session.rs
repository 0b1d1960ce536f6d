//! Session: end-to-end API over one universe, a signature and its interpretations.

use crate::config::EngineConfig;
use crate::error::{LogicError, Result};
use crate::inference::{
    resolution_proof, ExistentialInstantiation, InferenceRule, UniversalInstantiation,
};
use crate::normalize::{get_clause_set, get_cnf, get_prenex_nnf, skolemize, Skolemized};
use crate::parser::parse;
use crate::resolution::{ProofTrace, ResolutionResult};
use crate::semantics::{
    enumerate_interpretations, read, write, Element, ElementId, Function, Interpretation,
    MapUniverse, PredicateRelation, SharedStructure, Structure, TruthValue, VariableAssignment,
};
use crate::syntax::{ClauseSet, FnSym, PredSym, Sentence, Signature, Var};

/// A session holds the shared structure, the signature and the interpretations built over it.
pub struct Session {
    structure: SharedStructure,
    signature: Signature,
    interpretations: Vec<Interpretation>,
    assignment: VariableAssignment,
    config: EngineConfig,
    last_trace: Option<ProofTrace>,
}

impl Session {
    /// Create a new empty session.
    pub fn new() -> Self {
        Session::with_config(EngineConfig::default())
    }

    /// Create a session with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Session {
            structure: Structure::new(MapUniverse::new()).into_shared(),
            signature: Signature::empty(),
            interpretations: Vec::new(),
            assignment: VariableAssignment::new(),
            config,
            last_trace: None,
        }
    }

    // --- universe ---

    pub fn add_element(&mut self, label: &str) -> ElementId {
        let element = Element::new(label);
        let id = element.id();
        write(&self.structure).universe_mut().add_element(element);
        id
    }

    pub fn remove_element(&mut self, id: ElementId) -> Result<Element> {
        write(&self.structure).universe_mut().remove_element(id)
    }

    /// Ids of the universe, in insertion order.
    pub fn elements(&self) -> Vec<ElementId> {
        read(&self.structure).universe().element_ids()
    }

    // --- signature ---

    pub fn add_predicate(&mut self, name: &str, arity: usize) -> PredSym {
        let sym = PredSym::new(name, arity);
        self.signature.add_predicate(sym.clone());
        sym
    }

    pub fn remove_predicate(&mut self, name: &str) -> Option<PredSym> {
        self.signature.remove_predicate(name)
    }

    pub fn add_function(&mut self, name: &str, arity: usize) -> FnSym {
        let sym = FnSym::new(name, arity);
        self.signature.add_function(sym.clone());
        sym
    }

    pub fn remove_function(&mut self, name: &str) -> Option<FnSym> {
        self.signature.remove_function(name)
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    // --- interpretations ---

    /// Add an interpretation with no bindings and return its index.
    pub fn add_interpretation(&mut self) -> usize {
        self.interpretations
            .push(Interpretation::new(self.structure.clone()));
        self.interpretations.len() - 1
    }

    pub fn remove_interpretation(&mut self, index: usize) -> Result<Interpretation> {
        if index >= self.interpretations.len() {
            return Err(LogicError::InterpretationNotFound(index));
        }
        Ok(self.interpretations.remove(index))
    }

    pub fn interpretations(&self) -> &[Interpretation] {
        &self.interpretations
    }

    pub fn interpretation(&self, index: usize) -> Result<&Interpretation> {
        self.interpretations
            .get(index)
            .ok_or(LogicError::InterpretationNotFound(index))
    }

    fn interpretation_mut(&mut self, index: usize) -> Result<&mut Interpretation> {
        self.interpretations
            .get_mut(index)
            .ok_or(LogicError::InterpretationNotFound(index))
    }

    /// Add every interpretation of the signature over the current universe; returns how many.
    pub fn enumerate_interpretations(&mut self) -> Result<usize> {
        let found = enumerate_interpretations(
            &self.structure,
            &self.signature,
            self.config.max_interpretations,
        )?;
        let count = found.len();
        self.interpretations.extend(found);
        Ok(count)
    }

    // --- relations and functions ---

    fn elements_exist(&self, ids: impl IntoIterator<Item = ElementId>) -> Result<()> {
        let guard = read(&self.structure);
        for id in ids {
            guard.universe().element(id)?;
        }
        Ok(())
    }

    /// Store a relation for the signature predicate `name` and bind it in interpretation `index`.
    pub fn add_relation(
        &mut self,
        index: usize,
        name: &str,
        tuples: Vec<Vec<ElementId>>,
    ) -> Result<usize> {
        let sym = self
            .signature
            .predicate(name)
            .cloned()
            .ok_or_else(|| LogicError::Signature(name.to_string()))?;
        if let Some(bad) = tuples.iter().find(|t| t.len() != sym.arity) {
            return Err(LogicError::ArityMismatch {
                name: sym.name.clone(),
                arity: sym.arity,
                given: bad.len(),
            });
        }
        self.elements_exist(tuples.iter().flatten().copied())?;
        let interpretation = self.interpretation_mut(index)?;
        Ok(interpretation.register_relation(sym, PredicateRelation::new(tuples)))
    }

    /// Unbind predicate `name` in interpretation `index` and drop its relation from the structure.
    pub fn remove_relation(&mut self, index: usize, name: &str) -> Result<Option<PredicateRelation>> {
        let Some(sym) = self.signature.predicate(name).cloned() else {
            return Err(LogicError::Signature(name.to_string()));
        };
        let bound = self.interpretation_mut(index)?.unbind_predicate(&sym);
        Ok(bound.and_then(|id| write(&self.structure).remove_relation(id)))
    }

    /// Store a function for the signature symbol `name` and bind it in interpretation `index`.
    pub fn add_function_mapping(
        &mut self,
        index: usize,
        name: &str,
        mapping: Vec<(Vec<ElementId>, ElementId)>,
    ) -> Result<usize> {
        let sym = self
            .signature
            .function(name)
            .cloned()
            .ok_or_else(|| LogicError::Signature(name.to_string()))?;
        if let Some((bad, _)) = mapping.iter().find(|(args, _)| args.len() != sym.arity) {
            return Err(LogicError::ArityMismatch {
                name: sym.name.clone(),
                arity: sym.arity,
                given: bad.len(),
            });
        }
        self.elements_exist(
            mapping
                .iter()
                .flat_map(|(args, image)| args.iter().copied().chain(Some(*image))),
        )?;
        let interpretation = self.interpretation_mut(index)?;
        Ok(interpretation.register_function(sym, Function::new(mapping)))
    }

    pub fn remove_function_mapping(&mut self, index: usize, name: &str) -> Result<Option<Function>> {
        let Some(sym) = self.signature.function(name).cloned() else {
            return Err(LogicError::Signature(name.to_string()));
        };
        let bound = self.interpretation_mut(index)?.unbind_function(&sym);
        Ok(bound.and_then(|id| write(&self.structure).remove_function(id)))
    }

    // --- assignment ---

    /// Bind a free variable for evaluation; returns false if it was already bound.
    pub fn assign(&mut self, var: &str, element: ElementId) -> Result<bool> {
        self.elements_exist([element])?;
        Ok(self.assignment.add(Var::new(var), element))
    }

    pub fn assignment(&self) -> &VariableAssignment {
        &self.assignment
    }

    // --- syntax and normal forms ---

    /// Parse against the signature, checking symbols when the configuration says so.
    pub fn parse(&self, text: &str) -> Result<Sentence> {
        parse(text, &self.signature, self.config.check_signature)
    }

    pub fn parse_unchecked(&self, text: &str) -> Result<Sentence> {
        parse(text, &self.signature, false)
    }

    pub fn prenex(&self, sentence: &Sentence) -> Result<Sentence> {
        get_prenex_nnf(sentence, self.config.rewrite_limit)
    }

    pub fn cnf(&self, sentence: &Sentence) -> Result<Sentence> {
        get_cnf(sentence, self.config.rewrite_limit)
    }

    pub fn clause_set(&self, sentence: &Sentence) -> Result<ClauseSet> {
        get_clause_set(sentence, self.config.rewrite_limit)
    }

    /// Skolem form of the prenex form of `sentence`, with its functions stored in interpretation `index`.
    pub fn skolem(&mut self, index: usize, sentence: &Sentence) -> Result<Skolemized> {
        let prenex = self.prenex(sentence)?;
        let strip = self.config.strip_universals;
        let assignment = self.assignment.clone();
        let interpretation = self.interpretation_mut(index)?;
        skolemize(&prenex, interpretation, &assignment, strip)
    }

    // --- inference ---

    /// Run a rule that needs no interpretation.
    pub fn infer(&self, rule: &mut dyn InferenceRule, premises: &[Sentence]) -> Result<Sentence> {
        let conclusion = rule.conclude(premises)?;
        log::debug!("{} concluded {}", rule.name(), conclusion);
        Ok(conclusion)
    }

    pub fn existential_instantiation(
        &mut self,
        index: usize,
        premises: &[Sentence],
    ) -> Result<Sentence> {
        let assignment = self.assignment.clone();
        let interpretation = self.interpretation_mut(index)?;
        ExistentialInstantiation {
            interpretation,
            assignment: &assignment,
        }
        .conclude(premises)
    }

    pub fn universal_instantiation(
        &mut self,
        index: usize,
        element: ElementId,
        premises: &[Sentence],
    ) -> Result<Sentence> {
        let interpretation = self.interpretation_mut(index)?;
        UniversalInstantiation {
            interpretation,
            element,
        }
        .conclude(premises)
    }

    /// Resolution proof of `p1, p2 ⊢ conclusion`; a refutation's derivation is kept as the last trace.
    pub fn prove(
        &mut self,
        p1: &Sentence,
        p2: &Sentence,
        conclusion: &Sentence,
    ) -> Result<ResolutionResult> {
        let result = resolution_proof(p1, p2, conclusion, &self.config)?;
        self.last_trace = result.empty_clause().map(ProofTrace::of);
        Ok(result)
    }

    pub fn last_trace(&self) -> Option<&ProofTrace> {
        self.last_trace.as_ref()
    }

    // --- evaluation ---

    pub fn evaluate(&self, index: usize, sentence: &Sentence) -> Result<TruthValue> {
        Ok(self
            .interpretation(index)?
            .evaluate(sentence, &self.assignment))
    }

    pub fn truth_value(&self, index: usize, sentence: &Sentence) -> Result<bool> {
        self.evaluate(index, sentence).map(|t| t.value)
    }

    // --- configuration ---

    /// Update the configuration from a key/value pair.
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<()> {
        self.config.set(key, value)?;
        log::debug!("set {} = {}", key, value);
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{AndElimination, ModusPonens};

    fn hund_session() -> (Session, usize) {
        let mut session = Session::new();
        let d1 = session.add_element("d1");
        let d2 = session.add_element("d2");
        session.add_predicate("Hund", 1);
        session.add_predicate("Bellen", 1);
        session.add_predicate("Beissen", 1);
        let i = session.add_interpretation();
        session.add_relation(i, "Hund", vec![vec![d1], vec![d2]]).unwrap();
        session.add_relation(i, "Bellen", vec![vec![d1]]).unwrap();
        session.add_relation(i, "Beissen", vec![vec![d2]]).unwrap();
        (session, i)
    }

    // === Management ===

    #[test]
    fn test_elements_added_and_removed() {
        let mut session = Session::new();
        let a = session.add_element("a");
        let b = session.add_element("b");
        assert_eq!(session.elements(), vec![a, b]);
        assert_eq!(session.remove_element(a).unwrap().label(), "a");
        assert_eq!(session.elements(), vec![b]);
        assert_eq!(session.remove_element(a), Err(LogicError::ElementNotFound(a)));
    }

    #[test]
    fn test_relation_requires_signature_symbol() {
        let mut session = Session::new();
        let i = session.add_interpretation();
        let err = session.add_relation(i, "P", vec![]).unwrap_err();
        assert_eq!(err, LogicError::Signature("P".to_string()));
    }

    #[test]
    fn test_relation_arity_checked() {
        let mut session = Session::new();
        let a = session.add_element("a");
        session.add_predicate("P", 2);
        let i = session.add_interpretation();
        let err = session.add_relation(i, "P", vec![vec![a]]).unwrap_err();
        assert!(matches!(err, LogicError::ArityMismatch { given: 1, .. }));
    }

    #[test]
    fn test_unknown_interpretation_index() {
        let mut session = Session::new();
        session.add_predicate("P", 0);
        assert_eq!(
            session.add_relation(3, "P", vec![]),
            Err(LogicError::InterpretationNotFound(3))
        );
        assert!(session.remove_interpretation(0).is_err());
    }

    #[test]
    fn test_remove_relation_makes_atom_false() {
        let (mut session, i) = hund_session();
        let s = session.parse("∃x Bellen(x)").unwrap();
        assert!(session.truth_value(i, &s).unwrap());
        assert!(session.remove_relation(i, "Bellen").unwrap().is_some());
        assert!(!session.truth_value(i, &s).unwrap());
    }

    #[test]
    fn test_enumerate_adds_interpretations() {
        let mut session = Session::new();
        session.add_element("a");
        session.add_element("b");
        session.add_predicate("P", 1);
        assert_eq!(session.enumerate_interpretations().unwrap(), 4);
        assert_eq!(session.interpretations().len(), 4);
    }

    #[test]
    fn test_enumeration_cap_from_config() {
        let mut session = Session::new();
        session.add_element("a");
        session.add_element("b");
        session.add_predicate("P", 2);
        session.set_option("max_interpretations", "8").unwrap();
        assert!(matches!(
            session.enumerate_interpretations(),
            Err(LogicError::EnumerationTooLarge { .. })
        ));
    }

    // === Operations ===

    #[test]
    fn test_parse_follows_signature_checking_option() {
        let mut session = Session::new();
        assert!(matches!(session.parse("P(x)"), Err(LogicError::Signature(_))));
        session.set_option("check_signature", "false").unwrap();
        assert!(session.parse("P(x)").is_ok());
    }

    #[test]
    fn test_hund_evaluation() {
        let (session, i) = hund_session();
        let s = session
            .parse("∀x (Hund(x) → (Bellen(x) ∨ Beissen(x)))")
            .unwrap();
        assert!(session.truth_value(i, &s).unwrap());
    }

    #[test]
    fn test_free_variable_uses_assignment() {
        let (mut session, i) = hund_session();
        let d2 = session.elements()[1];
        let s = session.parse("Beissen(y)").unwrap();
        assert!(!session.truth_value(i, &s).unwrap());
        assert!(session.assign("y", d2).unwrap());
        assert!(session.truth_value(i, &s).unwrap());
    }

    #[test]
    fn test_skolem_registers_function() {
        let mut session = Session::new();
        let a = session.add_element("a");
        session.add_predicate("R", 2);
        let i = session.add_interpretation();
        session.add_relation(i, "R", vec![vec![a, a]]).unwrap();
        let s = session.parse("∀x ∃y R(x, y)").unwrap();
        let out = session.skolem(i, &s).unwrap();
        let sym = &out.functions[0];
        assert!(session.interpretation(i).unwrap().function_id(sym).is_some());
        assert!(session.truth_value(i, &out.sentence).unwrap());
    }

    #[test]
    fn test_rules_through_session() {
        let mut session = Session::new();
        session.set_option("check_signature", "false").unwrap();
        let premises = vec![
            session.parse("Rain()").unwrap(),
            session.parse("(Rain() → Wet())").unwrap(),
        ];
        let wet = session.infer(&mut ModusPonens, &premises).unwrap();
        assert_eq!(wet.to_string(), "Wet()");
        assert!(session
            .infer(&mut AndElimination::default(), &premises)
            .is_err());
    }

    #[test]
    fn test_universal_instantiation_through_session() {
        let (mut session, i) = hund_session();
        let d1 = session.elements()[0];
        let premises = vec![session.parse("∀x Bellen(x)").unwrap()];
        let instance = session.universal_instantiation(i, d1, &premises).unwrap();
        assert!(session.truth_value(i, &instance).unwrap());
    }

    #[test]
    fn test_prove_keeps_trace_of_refutation() {
        let mut session = Session::new();
        session.set_option("check_signature", "false").unwrap();
        let p1 = session
            .parse("∀x ((Dog(x) ∧ Barks(x)) → ¬Bites(x))")
            .unwrap();
        let p2 = session.parse("(Dog(a()) ∧ Barks(a()))").unwrap();
        let yes = session.parse("¬Bites(a())").unwrap();
        let no = session.parse("Bites(a())").unwrap();

        assert!(session.prove(&p1, &p2, &yes).unwrap().is_refutation());
        assert!(!session.last_trace().unwrap().is_empty());
        assert!(matches!(
            session.prove(&p1, &p2, &no).unwrap(),
            ResolutionResult::Saturated
        ));
        assert!(session.last_trace().is_none());
    }
}
