//! Structures: a universe plus the relations and functions defined over it.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use super::universe::{next_id, ElementId, MapUniverse, Universe};

/// The extension of a predicate: a finite set of element tuples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateRelation {
    id: usize,
    tuples: BTreeSet<Vec<ElementId>>,
}

impl PredicateRelation {
    pub fn new(tuples: impl IntoIterator<Item = Vec<ElementId>>) -> Self {
        PredicateRelation {
            id: next_id(),
            tuples: tuples.into_iter().collect(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn contains(&self, tuple: &[ElementId]) -> bool {
        self.tuples.contains(tuple)
    }

    pub fn tuples(&self) -> &BTreeSet<Vec<ElementId>> {
        &self.tuples
    }
}

/// A finite partial mapping from element tuples to elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    id: usize,
    mapping: BTreeMap<Vec<ElementId>, ElementId>,
}

impl Function {
    pub fn new(mapping: impl IntoIterator<Item = (Vec<ElementId>, ElementId)>) -> Self {
        Function {
            id: next_id(),
            mapping: mapping.into_iter().collect(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn apply(&self, args: &[ElementId]) -> Option<ElementId> {
        self.mapping.get(args).copied()
    }

    pub fn mapping(&self) -> &BTreeMap<Vec<ElementId>, ElementId> {
        &self.mapping
    }
}

/// One universe with id-keyed tables of relations and functions.
#[derive(Debug)]
pub struct Structure {
    universe: Box<dyn Universe>,
    relations: IndexMap<usize, PredicateRelation>,
    functions: IndexMap<usize, Function>,
}

/// A structure shared by every interpretation built over it.
pub type SharedStructure = Arc<RwLock<Structure>>;

impl Structure {
    pub fn new(universe: impl Universe + 'static) -> Self {
        Structure {
            universe: Box::new(universe),
            relations: IndexMap::new(),
            functions: IndexMap::new(),
        }
    }

    pub fn into_shared(self) -> SharedStructure {
        Arc::new(RwLock::new(self))
    }

    pub fn universe(&self) -> &dyn Universe {
        self.universe.as_ref()
    }

    pub fn universe_mut(&mut self) -> &mut dyn Universe {
        self.universe.as_mut()
    }

    pub fn add_relation(&mut self, relation: PredicateRelation) -> usize {
        let id = relation.id();
        self.relations.insert(id, relation);
        id
    }

    pub fn remove_relation(&mut self, id: usize) -> Option<PredicateRelation> {
        self.relations.shift_remove(&id)
    }

    pub fn relation(&self, id: usize) -> Option<&PredicateRelation> {
        self.relations.get(&id)
    }

    pub fn add_function(&mut self, function: Function) -> usize {
        let id = function.id();
        self.functions.insert(id, function);
        id
    }

    pub fn remove_function(&mut self, id: usize) -> Option<Function> {
        self.functions.shift_remove(&id)
    }

    pub fn function(&self, id: usize) -> Option<&Function> {
        self.functions.get(&id)
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}

impl Default for Structure {
    fn default() -> Self {
        Structure::new(MapUniverse::new())
    }
}

/// Read access that survives a panicked writer.
pub fn read(structure: &SharedStructure) -> RwLockReadGuard<'_, Structure> {
    structure.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access that survives a panicked writer.
pub fn write(structure: &SharedStructure) -> RwLockWriteGuard<'_, Structure> {
    structure.write().unwrap_or_else(PoisonError::into_inner)
}
