//! Connectives and quantifiers labelling complex sentence nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Var;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connective {
    Affirmation,
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Biconditional,
}

impl Connective {
    pub fn is_unary(self) -> bool {
        matches!(self, Connective::Affirmation | Connective::Negation)
    }

    /// Conjunction and disjunction are opposites, as are affirmation and negation.
    pub fn opposite(self) -> Option<Connective> {
        match self {
            Connective::Conjunction => Some(Connective::Disjunction),
            Connective::Disjunction => Some(Connective::Conjunction),
            Connective::Affirmation => Some(Connective::Negation),
            Connective::Negation => Some(Connective::Affirmation),
            Connective::Implication | Connective::Biconditional => None,
        }
    }

    pub fn is_and_or(self) -> bool {
        matches!(self, Connective::Conjunction | Connective::Disjunction)
    }

    pub fn glyph(self) -> char {
        match self {
            Connective::Affirmation => '+',
            Connective::Negation => '¬',
            Connective::Conjunction => '∧',
            Connective::Disjunction => '∨',
            Connective::Implication => '→',
            Connective::Biconditional => '↔',
        }
    }

    pub fn from_glyph(c: char) -> Option<Connective> {
        match c {
            '+' => Some(Connective::Affirmation),
            '¬' => Some(Connective::Negation),
            '∧' => Some(Connective::Conjunction),
            '∨' => Some(Connective::Disjunction),
            '→' => Some(Connective::Implication),
            '↔' => Some(Connective::Biconditional),
            _ => None,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantifierKind {
    Universal,
    Existential,
}

impl QuantifierKind {
    pub fn opposite(self) -> QuantifierKind {
        match self {
            QuantifierKind::Universal => QuantifierKind::Existential,
            QuantifierKind::Existential => QuantifierKind::Universal,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            QuantifierKind::Universal => '∀',
            QuantifierKind::Existential => '∃',
        }
    }

    pub fn from_glyph(c: char) -> Option<QuantifierKind> {
        match c {
            '∀' => Some(QuantifierKind::Universal),
            '∃' => Some(QuantifierKind::Existential),
            _ => None,
        }
    }
}

/// A quantifier together with the variable it binds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quantifier {
    pub kind: QuantifierKind,
    pub var: Var,
}

impl Quantifier {
    pub fn universal(var: Var) -> Self {
        Quantifier {
            kind: QuantifierKind::Universal,
            var,
        }
    }

    pub fn existential(var: Var) -> Self {
        Quantifier {
            kind: QuantifierKind::Existential,
            var,
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.glyph(), self.var)
    }
}

/// The label of a complex sentence node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Connective(Connective),
    Quantifier(Quantifier),
}

impl Operator {
    /// Number of child sentences a node with this operator has.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Connective(c) if c.is_unary() => 1,
            Operator::Connective(_) => 2,
            Operator::Quantifier(_) => 1,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Connective(c) => write!(f, "{}", c),
            Operator::Quantifier(q) => write!(f, "{}", q),
        }
    }
}
