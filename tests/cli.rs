#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;

const PROMPT: &str = "Guess an integer between 1 and 100: ";

fn guess(line: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("guess_round").expect("cargo bin");
    cmd.env_remove("RUST_LOG").write_stdin(line).assert()
}

#[test]
fn non_numeric_input() {
    guess("hello\n")
        .success()
        .stdout(predicate::str::diff(format!("{}Please enter a valid number\n", PROMPT)))
        .stderr("");
}

#[test]
fn decimal_input() {
    guess("12.5\n")
        .success()
        .stdout(predicate::str::diff(format!("{}Please enter a valid number\n", PROMPT)))
        .stderr("");
}

#[test]
fn out_of_range_input() {
    for line in ["200\n", "0\n", "101\n", "-5\n"] {
        guess(line)
            .success()
            .stdout(predicate::str::diff(format!("{}Please enter a number between 1 and 100\n", PROMPT)))
            .stderr("");
    }
}

#[test]
fn fullwidth_digits_input() {
    guess("５０\n")
        .success()
        .stdout(predicate::str::diff(format!("{}Please enter a valid number\n", PROMPT)))
        .stderr("");
}

#[test]
fn in_range_input_gets_a_verdict() {
    let verdict = predicate::str::is_match(
        r"^Guess an integer between 1 and 100: (You guessed correctly!|Sorry, the number was ([1-9]|[1-9][0-9]|100)\. Try again next time!)\n$",
    )
    .unwrap();
    for line in ["1\n", "50\n", "100\n"] {
        guess(line).success().stdout(verdict.clone()).stderr("");
    }
}

#[test]
fn closed_stdin_fails() {
    guess("")
        .failure()
        .stdout(PROMPT)
        .stderr(predicate::str::contains("Input stream closed"));
}
