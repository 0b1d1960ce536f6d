//! Domain elements and the universes that hold them.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{LogicError, Result};

/// Identity of an element, relation or function.
pub type ElementId = usize;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Next id from the process-wide counter. Ids are never reused.
pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// An opaque domain value with a process-unique id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Element {
    id: ElementId,
    label: String,
}

impl Element {
    pub fn new(label: impl Into<String>) -> Self {
        Element {
            id: next_id(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.id)
    }
}

/// Storage for the elements of a domain of discourse.
pub trait Universe: fmt::Debug + Send + Sync {
    fn add_element(&mut self, element: Element);

    fn remove_element(&mut self, id: ElementId) -> Result<Element>;

    fn element(&self, id: ElementId) -> Result<&Element>;

    /// Ids of all elements, in insertion order.
    fn element_ids(&self) -> Vec<ElementId>;

    fn len(&self) -> usize {
        self.element_ids().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A universe backed by an insertion-ordered map.
#[derive(Debug, Clone, Default)]
pub struct MapUniverse {
    elements: IndexMap<ElementId, Element>,
}

impl MapUniverse {
    pub fn new() -> Self {
        MapUniverse::default()
    }
}

impl Universe for MapUniverse {
    fn add_element(&mut self, element: Element) {
        self.elements.insert(element.id(), element);
    }

    fn remove_element(&mut self, id: ElementId) -> Result<Element> {
        self.elements
            .shift_remove(&id)
            .ok_or(LogicError::ElementNotFound(id))
    }

    fn element(&self, id: ElementId) -> Result<&Element> {
        self.elements.get(&id).ok_or(LogicError::ElementNotFound(id))
    }

    fn element_ids(&self) -> Vec<ElementId> {
        self.elements.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}
