use std::io::Write;
use std::process::{Command, Stdio};

fn run_cli(input: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fologic"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn CLI");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        stdin
            .write_all(input.as_bytes())
            .expect("failed to write to stdin");
    }

    let output = child.wait_with_output().expect("failed to read CLI output");
    assert!(output.status.success(), "CLI should exit cleanly");
    String::from_utf8(output.stdout).expect("utf-8 output")
}

#[test]
fn cli_prints_banner_and_exits_on_quit() {
    let out = run_cli(":quit\n");
    assert!(out.contains("Type :help"));
}

#[test]
fn cli_exits_at_end_of_input() {
    let out = run_cli("P(x)\n");
    assert!(out.contains("P(x)"));
}

#[test]
fn cli_prenex_and_proof() {
    let out = run_cli(
        ":pnf ¬∀x P(x)\n\
         :prove ∀x ((Dog(x) ∧ Barks(x)) → ¬Bites(x)) ; (Dog(a) ∧ Barks(a)) ; ¬Bites(a)\n\
         :quit\n",
    );
    assert!(out.contains("∃x ¬P(x)"));
    assert!(out.contains("proved ("));
}

#[test]
fn cli_reports_errors_and_continues() {
    let out = run_cli("(P(x) ∧\n:nonsense\nQ(y)\n:quit\n");
    assert_eq!(out.matches("Error:").count(), 2);
    assert!(out.contains("Q(y)"));
}
