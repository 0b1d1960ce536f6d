//! Variable bindings: free-variable assignments and transient quantifier bindings.

use std::collections::HashMap;

use super::ElementId;
use crate::syntax::Var;

/// Bindings of free variables to elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableAssignment {
    bindings: HashMap<Var, ElementId>,
}

impl VariableAssignment {
    pub fn new() -> Self {
        VariableAssignment::default()
    }

    /// Bind `var`. A variable that is already bound keeps its element; returns whether it was added.
    pub fn add(&mut self, var: Var, element: ElementId) -> bool {
        if self.bindings.contains_key(&var) {
            return false;
        }
        self.bindings.insert(var, element);
        true
    }

    pub fn remove(&mut self, var: &Var) -> Option<ElementId> {
        self.bindings.remove(var)
    }

    pub fn get(&self, var: &Var) -> Option<ElementId> {
        self.bindings.get(var).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Elements bound by the quantifiers currently being evaluated, innermost last.
#[derive(Debug, Clone, Default)]
pub struct QuantifierBindings {
    stack: Vec<(Var, ElementId)>,
}

impl QuantifierBindings {
    pub fn new() -> Self {
        QuantifierBindings::default()
    }

    /// Bind `var`, dropping any stale binding of the same variable. Returns the dropped element.
    pub fn bind(&mut self, var: &Var, element: ElementId) -> Option<ElementId> {
        let previous = self.unbind(var);
        self.stack.push((var.clone(), element));
        previous
    }

    pub fn unbind(&mut self, var: &Var) -> Option<ElementId> {
        let pos = self.stack.iter().rposition(|(v, _)| v == var)?;
        Some(self.stack.remove(pos).1)
    }

    pub fn lookup(&self, var: &Var) -> Option<ElementId> {
        self.stack.iter().rev().find(|(v, _)| v == var).map(|(_, e)| *e)
    }
}
