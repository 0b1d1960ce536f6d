//! First-order terms: variables and function applications (constants are 0-ary applications).

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

/// A named, arity-tagged identifier.
///
/// Symbols compare by name and arity together: `P/1` and `P/2` are different
/// symbols.
pub trait Symbol {
    fn name(&self) -> &str;
    fn arity(&self) -> usize;
}

/// A variable symbol. Variables always have arity 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Var {
    name: String,
}

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Var { name: name.into() }
    }

    /// A variable whose name has never been handed out before in this process.
    pub fn fresh() -> Self {
        Var::new(fresh_name("sk_v"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Symbol for Var {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A function symbol with its arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FnSym {
    pub name: String,
    pub arity: usize,
}

impl FnSym {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        FnSym {
            name: name.into(),
            arity,
        }
    }
}

impl Symbol for FnSym {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl fmt::Display for FnSym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// A predicate symbol with its arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PredSym {
    pub name: String,
    pub arity: usize,
}

impl PredSym {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        PredSym {
            name: name.into(),
            arity,
        }
    }
}

impl Symbol for PredSym {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }
}

impl fmt::Display for PredSym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

static FRESH_NAMES: AtomicUsize = AtomicUsize::new(0);

/// Generate a name with the given prefix that is unique for the lifetime of the process.
pub fn fresh_name(prefix: &str) -> String {
    let n = FRESH_NAMES.fetch_add(1, Ordering::Relaxed);
    format!("{}{}", prefix, n)
}

/// A first-order term.
///
/// Bare identifiers in the surface syntax are variables; `c()` is a 0-ary
/// function application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// A variable
    Var(Var),
    /// Function application: f(t1, ..., tn)
    App(FnSym, Vec<Term>),
}

impl Term {
    /// Create a variable term.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(Var::new(name))
    }

    /// Create a constant term (0-ary application).
    pub fn constant(name: impl Into<String>) -> Self {
        Term::App(FnSym::new(name, 0), Vec::new())
    }

    /// Create a function application term; the arity is taken from the arguments.
    pub fn app(name: impl Into<String>, args: Vec<Term>) -> Self {
        let arity = args.len();
        Term::App(FnSym::new(name, arity), args)
    }

    pub fn as_var(&self) -> Option<&Var> {
        match self {
            Term::Var(v) => Some(v),
            Term::App(_, _) => None,
        }
    }

    /// Collect all variables occurring in this term.
    pub fn variables(&self) -> HashSet<Var> {
        let mut set = HashSet::new();
        self.collect_variables(&mut set);
        set
    }

    fn collect_variables(&self, acc: &mut HashSet<Var>) {
        match self {
            Term::Var(v) => {
                acc.insert(v.clone());
            }
            Term::App(_, args) => {
                for arg in args {
                    arg.collect_variables(acc);
                }
            }
        }
    }

    /// Check whether `var` occurs anywhere in this term.
    pub fn occurs(&self, var: &Var) -> bool {
        match self {
            Term::Var(v) => v == var,
            Term::App(_, args) => args.iter().any(|a| a.occurs(var)),
        }
    }

    /// Check whether this term and `other` have a variable in common.
    pub fn shares_variable(&self, other: &Term) -> bool {
        match self {
            Term::Var(v) => other.occurs(v),
            Term::App(_, args) => args.iter().any(|a| a.shares_variable(other)),
        }
    }

    /// Check if this term is ground (contains no variables).
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::App(_, args) => args.iter().all(|a| a.is_ground()),
        }
    }

    /// Function symbols used in this term, outermost first.
    pub fn function_symbols(&self) -> Vec<&FnSym> {
        let mut out = Vec::new();
        self.collect_function_symbols(&mut out);
        out
    }

    fn collect_function_symbols<'a>(&'a self, acc: &mut Vec<&'a FnSym>) {
        if let Term::App(sym, args) = self {
            acc.push(sym);
            for arg in args {
                arg.collect_function_symbols(acc);
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{}", v),
            Term::App(sym, args) => {
                write!(f, "{}(", sym.name)?;
                write_terms(f, args)?;
                write!(f, ")")
            }
        }
    }
}

/// Write a comma separated term list.
pub(crate) fn write_terms(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    for (i, t) in terms.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", t)?;
    }
    Ok(())
}
