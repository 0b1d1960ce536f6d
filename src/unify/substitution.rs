//! Substitution: mapping variables to terms.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::syntax::{NodeId, Sentence, Term, Var};

/// A substitution σ = {x₁ ↦ t₁, ..., xₙ ↦ tₙ}.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    bindings: HashMap<Var, Term>,
}

impl Substitution {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    /// Create a substitution with a single binding.
    pub fn singleton(var: Var, term: Term) -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(var, term);
        Substitution { bindings }
    }

    pub fn bind(&mut self, var: Var, term: Term) {
        self.bindings.insert(var, term);
    }

    pub fn lookup(&self, var: &Var) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Apply this substitution to a term. Unmapped variables are left as they are.
    pub fn apply_to_term(&self, term: &Term) -> Term {
        match term {
            Term::Var(var) => match self.bindings.get(var) {
                Some(t) => t.clone(),
                None => term.clone(),
            },
            Term::App(fn_sym, args) => {
                let new_args: Vec<Term> = args.iter().map(|arg| self.apply_to_term(arg)).collect();
                Term::App(fn_sym.clone(), new_args)
            }
        }
    }

    /// Rewrite the terms of every atom below `id`.
    ///
    /// If `id` is itself a quantifier whose variable is mapped to another
    /// variable, the bound variable is renamed as well.
    pub fn apply_to_sentence(&self, sentence: &mut Sentence, id: NodeId) {
        for leaf in sentence.leaves(id) {
            if let Some(atom) = sentence.atom_mut(leaf) {
                atom.terms = atom.terms.iter().map(|t| self.apply_to_term(t)).collect();
            }
        }
        if let Some(q) = sentence.quantifier_mut(id) {
            if let Some(Term::Var(renamed)) = self.bindings.get(&q.var) {
                q.var = renamed.clone();
            }
        }
    }

    /// Apply to the whole sentence.
    pub fn apply(&self, sentence: &mut Sentence) {
        let root = sentence.root();
        self.apply_to_sentence(sentence, root);
    }

    pub fn domain(&self) -> HashSet<&Var> {
        self.bindings.keys().collect()
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&Var, &Term)> {
        self.bindings.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<String> = self
            .bindings
            .iter()
            .map(|(v, t)| format!("{} ↦ {}", v, t))
            .collect();
        pairs.sort();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}
