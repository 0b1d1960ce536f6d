//! Sentence parser for the infix glyph notation.
//!
//! A single left-to-right scan over each bracket level. A bracket group either
//! holds a nested sentence or, when an identifier precedes it, the term list of
//! an atom. Prefixes (`¬`, `∀x`, `∃x`) seen at the current level wrap the next
//! completed operand; a binary connective joins the previous operand with the
//! next one.

use super::scanner::Scanner;
use crate::error::{LogicError, Result};
use crate::syntax::{Atom, Connective, Quantifier, QuantifierKind, Sentence, Signature, Term, Var};

/// Parse `text` and, if `check_signature` is set, verify its symbols against `signature`.
pub fn parse(text: &str, signature: &Signature, check_signature: bool) -> Result<Sentence> {
    let sentence = parse_sentence(text)?;
    if check_signature {
        signature.check(&sentence)?;
    }
    Ok(sentence)
}

/// Parse `text` without any signature check.
pub fn parse_sentence(text: &str) -> Result<Sentence> {
    let scanner = Scanner::new(text);
    scanner.check_brackets()?;
    let sentence = parse_range(&scanner, 0, scanner.len())?;
    log::trace!(target: "parser", "parsed `{}` as {}", text, sentence);
    Ok(sentence)
}

enum Prefix {
    Connective(Connective),
    Quantifier(Quantifier),
}

/// Operands and connectives collected on one bracket level.
#[derive(Default)]
struct Level {
    left: Option<Sentence>,
    binary: Option<Connective>,
    prefixes: Vec<Prefix>,
}

impl Level {
    fn complete(&mut self, mut operand: Sentence) -> Result<()> {
        while let Some(prefix) = self.prefixes.pop() {
            operand = match prefix {
                Prefix::Connective(c) => Sentence::connective(c, vec![operand]),
                Prefix::Quantifier(q) => Sentence::quantified(q, operand),
            };
        }
        self.left = match (self.left.take(), self.binary.take()) {
            (None, _) => Some(operand),
            (Some(left), Some(op)) => Some(Sentence::connective(op, vec![left, operand])),
            (Some(left), None) => {
                return Err(LogicError::Syntax(format!(
                    "missing connective between `{}` and `{}`",
                    left, operand
                )))
            }
        };
        Ok(())
    }

    fn finish(self, scanner: &Scanner, start: usize, end: usize) -> Result<Sentence> {
        if !self.prefixes.is_empty() || self.binary.is_some() {
            return Err(LogicError::Syntax(format!(
                "missing operand at end of `{}`",
                scanner.slice(start, end)
            )));
        }
        self.left
            .ok_or_else(|| LogicError::Syntax(format!("empty sentence at position {}", start)))
    }
}

fn parse_range(scanner: &Scanner, start: usize, end: usize) -> Result<Sentence> {
    let mut level = Level::default();
    let mut i = start;
    while i < end {
        let c = scanner.at(i);
        if c.is_whitespace() {
            i += 1;
        } else if c == '(' {
            let close = scanner.matching_close(i, end)?;
            let inner = parse_range(scanner, i + 1, close)?;
            level.complete(inner)?;
            i = close + 1;
        } else if c == ')' {
            return Err(scanner.bracket_error(i));
        } else if let Some(kind) = QuantifierKind::from_glyph(c) {
            let at = scanner.skip_whitespace(i + 1, end);
            let (name, next) = scanner.identifier(at, end).ok_or_else(|| {
                LogicError::Syntax(format!("quantifier at position {} has no variable", i))
            })?;
            level.prefixes.push(Prefix::Quantifier(Quantifier {
                kind,
                var: Var::new(name),
            }));
            i = next;
        } else if let Some(conn) = Connective::from_glyph(c) {
            if conn.is_unary() {
                level.prefixes.push(Prefix::Connective(conn));
            } else {
                if level.left.is_none() || level.binary.is_some() || !level.prefixes.is_empty() {
                    return Err(LogicError::Syntax(format!(
                        "`{}` at position {} has no left operand",
                        c, i
                    )));
                }
                level.binary = Some(conn);
            }
            i += 1;
        } else if let Some((name, next)) = scanner.identifier(i, end) {
            let open = scanner.skip_whitespace(next, end);
            if open >= end || scanner.at(open) != '(' {
                return Err(LogicError::Syntax(format!(
                    "predicate `{}` at position {} has no argument list",
                    name, i
                )));
            }
            let close = scanner.matching_close(open, end)?;
            let terms = parse_terms(scanner, open + 1, close)?;
            level.complete(Sentence::atomic(Atom::from_terms(name, terms)))?;
            i = close + 1;
        } else {
            return Err(LogicError::Syntax(format!(
                "unexpected character `{}` at position {}",
                c, i
            )));
        }
    }
    level.finish(scanner, start, end)
}

/// Parse a comma separated term list occupying `[start, end)`.
fn parse_terms(scanner: &Scanner, start: usize, end: usize) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    if scanner.skip_whitespace(start, end) == end {
        return Ok(terms);
    }
    let mut depth = 0usize;
    let mut piece_start = start;
    for i in start..end {
        match scanner.at(i) {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                terms.push(parse_term(scanner, piece_start, i)?);
                piece_start = i + 1;
            }
            _ => {}
        }
    }
    terms.push(parse_term(scanner, piece_start, end)?);
    Ok(terms)
}

fn parse_term(scanner: &Scanner, start: usize, end: usize) -> Result<Term> {
    let i = scanner.skip_whitespace(start, end);
    let (name, next) = scanner.identifier(i, end).ok_or_else(|| {
        LogicError::Syntax(format!("expected a term in `{}`", scanner.slice(start, end)))
    })?;
    let after = scanner.skip_whitespace(next, end);
    if after == end {
        return Ok(Term::var(name));
    }
    if scanner.at(after) != '(' {
        return Err(LogicError::Syntax(format!(
            "unexpected text after term `{}` in `{}`",
            name,
            scanner.slice(start, end)
        )));
    }
    let close = scanner.matching_close(after, end)?;
    if scanner.skip_whitespace(close + 1, end) != end {
        return Err(LogicError::Syntax(format!(
            "unexpected text after term in `{}`",
            scanner.slice(start, end)
        )));
    }
    let args = parse_terms(scanner, after + 1, close)?;
    Ok(Term::app(name, args))
}
