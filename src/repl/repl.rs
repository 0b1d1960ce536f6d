//! REPL implementation.

use std::io::{self, BufRead, Write};

use crate::error::LogicError;
use crate::resolution::ResolutionResult;
use crate::session::Session;

const HELP: &str = "\
Commands:
  F                    parse F and print it in canonical form
  :pnf F               prenex negation normal form of F
  :cnf F               conjunctive normal form of F
  :clauses F           clause set of F
  :prove P1 ; P2 ; C   resolution proof of C from P1 and P2
  :trace               derivation of the last successful proof as JSON
  :set key value       change an engine option
  :help                show this text
  :quit                leave";

/// REPL error.
#[derive(Debug)]
pub struct ReplError {
    pub message: String,
}

impl std::fmt::Display for ReplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ReplError {}

impl From<LogicError> for ReplError {
    fn from(err: LogicError) -> Self {
        ReplError {
            message: err.to_string(),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(err: io::Error) -> Self {
        ReplError {
            message: format!("I/O error: {}", err),
        }
    }
}

fn usage(command: &str) -> ReplError {
    ReplError {
        message: format!("usage: {}", command),
    }
}

/// Interactive REPL over a session. Sentences are parsed without signature checks.
pub struct Repl {
    session: Session,
    finished: bool,
}

impl Repl {
    /// Create a new REPL.
    pub fn new() -> Self {
        Repl::with_session(Session::new())
    }

    pub fn with_session(session: Session) -> Self {
        Repl {
            session,
            finished: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether `:quit` has been entered.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process a line of input.
    pub fn process_line(&mut self, line: &str) -> Result<String, ReplError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(String::new());
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(self.session.parse_unchecked(line)?.to_string());
        };
        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };
        match name {
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => {
                self.finished = true;
                Ok(String::new())
            }
            "pnf" => {
                let s = self.session.parse_unchecked(rest)?;
                Ok(self.session.prenex(&s)?.to_string())
            }
            "cnf" => {
                let s = self.session.parse_unchecked(rest)?;
                Ok(self.session.cnf(&s)?.to_string())
            }
            "clauses" => {
                let s = self.session.parse_unchecked(rest)?;
                Ok(self.session.clause_set(&s)?.to_string())
            }
            "prove" => self.prove(rest),
            "trace" => match self.session.last_trace() {
                Some(trace) => trace.to_json().map_err(|e| ReplError {
                    message: format!("cannot serialize trace: {}", e),
                }),
                None => Ok("no proof yet".to_string()),
            },
            "set" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| usage(":set key value"))?;
                self.session.set_option(key, value.trim())?;
                Ok(format!("{} = {}", key, value.trim()))
            }
            other => Err(ReplError {
                message: format!("unknown command :{} (try :help)", other),
            }),
        }
    }

    fn prove(&mut self, rest: &str) -> Result<String, ReplError> {
        let parts: Vec<&str> = rest.split(';').map(str::trim).collect();
        let [p1, p2, c] = parts.as_slice() else {
            return Err(usage(":prove P1 ; P2 ; C"));
        };
        let p1 = self.session.parse_unchecked(p1)?;
        let p2 = self.session.parse_unchecked(p2)?;
        let c = self.session.parse_unchecked(c)?;
        let answer = match self.session.prove(&p1, &p2, &c)? {
            ResolutionResult::Refutation(_) => {
                let steps = self.session.last_trace().map_or(0, |t| t.len());
                format!("proved ({} resolution steps)", steps)
            }
            ResolutionResult::Saturated => "not proved: clause set saturated".to_string(),
            ResolutionResult::ResourceLimit => "not proved: round limit reached".to_string(),
        };
        Ok(answer)
    }

    /// Run the REPL interactively.
    pub fn run(&mut self) -> Result<(), ReplError> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut lines = stdin.lock().lines();
        while !self.finished {
            write!(stdout, "fologic> ")?;
            stdout.flush()?;
            let Some(line) = lines.next() else { break };
            match self.process_line(&line?) {
                Ok(out) if out.is_empty() => {}
                Ok(out) => writeln!(stdout, "{}", out)?,
                Err(e) => writeln!(stdout, "Error: {}", e)?,
            }
        }
        Ok(())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_default_constructs() {
        let repl = Repl::default();
        assert!(!repl.is_finished());
    }

    #[test]
    fn test_bare_line_echoes_canonical_form() {
        let mut repl = Repl::new();
        let out = repl.process_line("  ∀x   ( P(x) ∧ Q(x) ) ").unwrap();
        assert_eq!(out, "∀x (P(x) ∧ Q(x))");
    }

    #[test]
    fn test_normal_form_commands() {
        let mut repl = Repl::new();
        assert_eq!(
            repl.process_line(":pnf (∀x P(x) ∧ ∃y Q(y))").unwrap(),
            "∀x ∃y (Q(y) ∧ P(x))"
        );
        assert_eq!(
            repl.process_line(":clauses (P(x) ∧ (Q(x) ∨ R(x)))").unwrap(),
            "{{P(x)}, {Q(x), R(x)}}"
        );
    }

    #[test]
    fn test_prove_and_trace() {
        let mut repl = Repl::new();
        assert_eq!(repl.process_line(":trace").unwrap(), "no proof yet");
        let out = repl
            .process_line(":prove ∀x ((Dog(x) ∧ Barks(x)) → ¬Bites(x)) ; (Dog(a) ∧ Barks(a)) ; ¬Bites(a)")
            .unwrap();
        assert!(out.starts_with("proved"));
        assert!(repl.process_line(":trace").unwrap().contains("\"resolvent\""));
    }

    #[test]
    fn test_prove_needs_three_parts() {
        let mut repl = Repl::new();
        let err = repl.process_line(":prove P(x) ; Q(x)").unwrap_err();
        assert!(err.message.starts_with("usage"));
    }

    #[test]
    fn test_set_and_unknown_command() {
        let mut repl = Repl::new();
        assert_eq!(
            repl.process_line(":set resolution_rounds 5").unwrap(),
            "resolution_rounds = 5"
        );
        assert_eq!(repl.session().config().resolution_rounds, Some(5));
        assert!(repl.process_line(":set depth 5").is_err());
        assert!(repl.process_line(":frobnicate").is_err());
    }

    #[test]
    fn test_quit_finishes() {
        let mut repl = Repl::new();
        repl.process_line(":quit").unwrap();
        assert!(repl.is_finished());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let mut repl = Repl::new();
        assert!(repl.process_line("(P(x) ∧ Q(x)").is_err());
    }
}
