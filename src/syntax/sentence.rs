//! Sentence trees stored in an index arena.
//!
//! Every node lives in a slot of the owning [`Sentence`] and is addressed by a
//! [`NodeId`]. Children are stored as ids and every slot records its parent id
//! and depth. [`Sentence::replace_with_equivalent`] overwrites a slot in place,
//! so ids held by ancestors stay valid across rewrites. Subtrees that a rewrite
//! detaches stay in the arena until the next [`Sentence::compact`].

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Atom, Connective, Operator, Quantifier, Term, Var};

/// Stable index of a node inside one sentence arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The content of one arena slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Atomic(Atom),
    Complex(Operator, Vec<NodeId>),
}

#[derive(Debug, Clone)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
    level: usize,
}

/// A first-order sentence.
///
/// Equality and hashing go through the canonical printed form.
#[derive(Debug, Clone)]
pub struct Sentence {
    slots: Vec<Slot>,
    root: NodeId,
}

impl Sentence {
    // === Construction ===

    pub fn atomic(atom: Atom) -> Self {
        Sentence {
            slots: vec![Slot {
                node: Node::Atomic(atom),
                parent: None,
                level: 0,
            }],
            root: NodeId(0),
        }
    }

    /// Build a complex sentence, copying each child into the new arena.
    pub fn complex(op: Operator, children: Vec<Sentence>) -> Self {
        let mut sentence = Sentence {
            slots: vec![Slot {
                node: Node::Complex(op.clone(), Vec::new()),
                parent: None,
                level: 0,
            }],
            root: NodeId(0),
        };
        let root = sentence.root;
        let ids = children
            .iter()
            .map(|child| sentence.import(child, child.root, Some(root), 1))
            .collect();
        sentence.slots[0].node = Node::Complex(op, ids);
        sentence
    }

    pub fn connective(c: Connective, children: Vec<Sentence>) -> Self {
        Sentence::complex(Operator::Connective(c), children)
    }

    pub fn not(s: Sentence) -> Self {
        Sentence::connective(Connective::Negation, vec![s])
    }

    pub fn affirm(s: Sentence) -> Self {
        Sentence::connective(Connective::Affirmation, vec![s])
    }

    pub fn and(p: Sentence, q: Sentence) -> Self {
        Sentence::connective(Connective::Conjunction, vec![p, q])
    }

    pub fn or(p: Sentence, q: Sentence) -> Self {
        Sentence::connective(Connective::Disjunction, vec![p, q])
    }

    pub fn implies(p: Sentence, q: Sentence) -> Self {
        Sentence::connective(Connective::Implication, vec![p, q])
    }

    pub fn iff(p: Sentence, q: Sentence) -> Self {
        Sentence::connective(Connective::Biconditional, vec![p, q])
    }

    pub fn quantified(q: Quantifier, body: Sentence) -> Self {
        Sentence::complex(Operator::Quantifier(q), vec![body])
    }

    pub fn forall(var: Var, body: Sentence) -> Self {
        Sentence::quantified(Quantifier::universal(var), body)
    }

    pub fn exists(var: Var, body: Sentence) -> Self {
        Sentence::quantified(Quantifier::existential(var), body)
    }

    /// Copy the subtree of `other` rooted at `id` into this arena.
    fn import(&mut self, other: &Sentence, id: NodeId, parent: Option<NodeId>, level: usize) -> NodeId {
        let new_id = NodeId(self.slots.len());
        self.slots.push(Slot {
            node: Node::Complex(Operator::Connective(Connective::Affirmation), Vec::new()),
            parent,
            level,
        });
        let node = match other.node(id) {
            Node::Atomic(atom) => Node::Atomic(atom.clone()),
            Node::Complex(op, children) => {
                let ids = children
                    .iter()
                    .map(|c| self.import(other, *c, Some(new_id), level + 1))
                    .collect();
                Node::Complex(op.clone(), ids)
            }
        };
        self.slots[new_id.0].node = node;
        new_id
    }

    // === Copying and in-place replacement ===

    /// Full structural deep copy holding only the live nodes.
    pub fn copy(&self) -> Sentence {
        self.subtree(self.root)
    }

    /// Detached deep copy of the subtree rooted at `id`.
    pub fn subtree(&self, id: NodeId) -> Sentence {
        let mut out = Sentence {
            slots: Vec::new(),
            root: NodeId(0),
        };
        out.root = out.import(self, id, None, 0);
        out
    }

    /// Drop the slots no longer reachable from the root. Invalidates held ids.
    pub fn compact(&mut self) {
        if self.live_count() != self.slots.len() {
            *self = self.copy();
        }
    }

    /// Overwrite node `id` with the content of `replacement`.
    ///
    /// The slot keeps its id, its parent and its level; the replacement's
    /// children are copied in underneath it.
    pub fn replace_with_equivalent(&mut self, id: NodeId, replacement: &Sentence) {
        let level = self.slots[id.0].level;
        let node = match replacement.node(replacement.root) {
            Node::Atomic(atom) => Node::Atomic(atom.clone()),
            Node::Complex(op, children) => {
                let ids = children
                    .iter()
                    .map(|c| self.import(replacement, *c, Some(id), level + 1))
                    .collect();
                Node::Complex(op.clone(), ids)
            }
        };
        self.slots[id.0].node = node;
    }

    // === Node access ===

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.slots[id.0].node
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].parent
    }

    /// Depth of the node; the root is at level 0.
    pub fn level(&self, id: NodeId) -> usize {
        self.slots[id.0].level
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Node::Atomic(_) => &[],
            Node::Complex(_, children) => children,
        }
    }

    /// First operand (`P`) of a complex node.
    pub fn p(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Second operand (`Q`) of a binary node.
    pub fn q(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).get(1).copied()
    }

    pub fn operator(&self, id: NodeId) -> Option<&Operator> {
        match self.node(id) {
            Node::Atomic(_) => None,
            Node::Complex(op, _) => Some(op),
        }
    }

    pub fn connective_of(&self, id: NodeId) -> Option<Connective> {
        match self.operator(id) {
            Some(Operator::Connective(c)) => Some(*c),
            _ => None,
        }
    }

    pub fn quantifier_of(&self, id: NodeId) -> Option<&Quantifier> {
        match self.operator(id) {
            Some(Operator::Quantifier(q)) => Some(q),
            _ => None,
        }
    }

    pub fn atom(&self, id: NodeId) -> Option<&Atom> {
        match self.node(id) {
            Node::Atomic(atom) => Some(atom),
            Node::Complex(_, _) => None,
        }
    }

    pub fn atom_mut(&mut self, id: NodeId) -> Option<&mut Atom> {
        match &mut self.slots[id.0].node {
            Node::Atomic(atom) => Some(atom),
            Node::Complex(_, _) => None,
        }
    }

    pub fn quantifier_mut(&mut self, id: NodeId) -> Option<&mut Quantifier> {
        match &mut self.slots[id.0].node {
            Node::Complex(Operator::Quantifier(q), _) => Some(q),
            _ => None,
        }
    }

    // === Shape predicates ===

    pub fn is_atomic(&self, id: NodeId) -> bool {
        matches!(self.node(id), Node::Atomic(_))
    }

    /// An atom, or an affirmation/negation wrapping a literal.
    pub fn is_literal(&self, id: NodeId) -> bool {
        self.literal_parts(id).is_some()
    }

    /// The atom under a literal and whether the literal is positive.
    pub fn literal_parts(&self, id: NodeId) -> Option<(&Atom, bool)> {
        match self.node(id) {
            Node::Atomic(atom) => Some((atom, true)),
            Node::Complex(Operator::Connective(Connective::Affirmation), children) => {
                self.literal_parts(children[0])
            }
            Node::Complex(Operator::Connective(Connective::Negation), children) => self
                .literal_parts(children[0])
                .map(|(atom, positive)| (atom, !positive)),
            Node::Complex(_, _) => None,
        }
    }

    /// A literal, or a disjunction whose operands are disjunctions of literals.
    pub fn is_disjunction_of_literals(&self, id: NodeId) -> bool {
        if self.is_literal(id) {
            return true;
        }
        self.connective_of(id) == Some(Connective::Disjunction)
            && self.children(id).iter().all(|c| self.is_disjunction_of_literals(*c))
    }

    pub fn contains_quantifier(&self, id: NodeId) -> bool {
        match self.node(id) {
            Node::Atomic(_) => false,
            Node::Complex(Operator::Quantifier(_), _) => true,
            Node::Complex(_, children) => children.iter().any(|c| self.contains_quantifier(*c)),
        }
    }

    // === Traversals ===

    /// Atomic nodes below `id`, left to right.
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_leaves(id, &mut out);
        out
    }

    fn collect_leaves(&self, id: NodeId, acc: &mut Vec<NodeId>) {
        match self.node(id) {
            Node::Atomic(_) => acc.push(id),
            Node::Complex(_, children) => {
                for c in children {
                    self.collect_leaves(*c, acc);
                }
            }
        }
    }

    /// Every term of every atom below `id`, left to right.
    pub fn terms(&self, id: NodeId) -> Vec<&Term> {
        self.leaves(id)
            .into_iter()
            .filter_map(|leaf| self.atom(leaf))
            .flat_map(|atom| atom.terms.iter())
            .collect()
    }

    /// Quantifier nodes at or below `id`, breadth first.
    pub fn quantifiers_below(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut queue = VecDeque::from([id]);
        while let Some(cur) = queue.pop_front() {
            if self.quantifier_of(cur).is_some() {
                out.push(cur);
            }
            queue.extend(self.children(cur).iter().copied());
        }
        out
    }

    /// Variables occurring below `id` that no quantifier below `id` binds.
    pub fn free_variables(&self, id: NodeId) -> BTreeSet<Var> {
        let mut out = BTreeSet::new();
        let mut bound = Vec::new();
        self.collect_free(id, &mut bound, &mut out);
        out
    }

    fn collect_free(&self, id: NodeId, bound: &mut Vec<Var>, acc: &mut BTreeSet<Var>) {
        match self.node(id) {
            Node::Atomic(atom) => {
                for term in &atom.terms {
                    for v in term.variables() {
                        if !bound.contains(&v) {
                            acc.insert(v);
                        }
                    }
                }
            }
            Node::Complex(Operator::Quantifier(q), children) => {
                bound.push(q.var.clone());
                self.collect_free(children[0], bound, acc);
                bound.pop();
            }
            Node::Complex(_, children) => {
                for c in children {
                    self.collect_free(*c, bound, acc);
                }
            }
        }
    }

    pub fn is_variable_free(&self, id: NodeId, var: &Var) -> bool {
        self.free_variables(id).contains(var)
    }

    /// Predicate symbols and top-level function symbols used below `id`.
    pub fn symbol_names(&self, id: NodeId) -> (HashSet<String>, HashSet<String>) {
        let mut predicates = HashSet::new();
        let mut functions = HashSet::new();
        for leaf in self.leaves(id) {
            if let Some(atom) = self.atom(leaf) {
                predicates.insert(atom.predicate.name.clone());
                for term in &atom.terms {
                    for sym in term.function_symbols() {
                        functions.insert(sym.name.clone());
                    }
                }
            }
        }
        (predicates, functions)
    }

    fn live_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            count += 1;
            stack.extend(self.children(id).iter().copied());
        }
        count
    }

    // === Printing ===

    /// Display adapter for the subtree rooted at `id`.
    pub fn display(&self, id: NodeId) -> NodeDisplay<'_> {
        NodeDisplay { sentence: self, id }
    }

    /// Canonical printed form of the subtree rooted at `id`.
    pub fn key(&self, id: NodeId) -> String {
        self.display(id).to_string()
    }
}

/// Prints one subtree of a sentence in canonical form.
pub struct NodeDisplay<'a> {
    sentence: &'a Sentence,
    id: NodeId,
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.sentence;
        match s.node(self.id) {
            Node::Atomic(atom) => write!(f, "{}", atom),
            Node::Complex(Operator::Quantifier(q), children) => {
                write!(f, "{} {}", q, s.display(children[0]))
            }
            Node::Complex(Operator::Connective(c), children) if c.is_unary() => {
                write!(f, "{}{}", c, s.display(children[0]))
            }
            Node::Complex(Operator::Connective(c), children) => {
                write!(f, "({} {} {})", s.display(children[0]), c, s.display(children[1]))
            }
        }
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(self.root))
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Sentence {}

impl Hash for Sentence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl From<Atom> for Sentence {
    fn from(atom: Atom) -> Self {
        Sentence::atomic(atom)
    }
}
