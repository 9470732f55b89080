use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cnfstat() -> Command {
    Command::cargo_bin("cnfstat").unwrap()
}

fn cnf_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn summarizes_file() {
    let file = cnf_file("p cnf 3 2\n1 -3 0\n2 3 -1 0\n");
    cnfstat()
        .arg(file.path())
        .assert()
        .success()
        .stdout("3 2 1:1 2:1\n")
        .stderr("");
}

#[test]
fn summarizes_stdin() {
    cnfstat()
        .write_stdin("p cnf 3 2\n1 -3 0\n2 3 -1 0\n")
        .assert()
        .success()
        .stdout("3 2 1:1 2:1\n");
    cnfstat()
        .arg("-")
        .write_stdin("p cnf 1 0\n")
        .assert()
        .success()
        .stdout("1 0\n");
}

#[test]
fn header_without_clauses() {
    let file = cnf_file("p cnf 1 0");
    cnfstat().arg(file.path()).assert().success().stdout("1 0\n");
}

#[test]
fn progress_bar_does_not_touch_stdout() {
    cnfstat()
        .arg("--progress")
        .write_stdin("p cnf 2 2\n1 0\n-2 1 0\n")
        .assert()
        .success()
        .stdout("2 2 1:1 2:1\n");
}

#[test]
fn extra_lines() {
    cnfstat()
        .write_stdin("p cnf 2 1\n1 2 0\n3 0\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(
            predicate::str::contains("line count mismatch")
                .and(predicate::str::contains("extra lines")),
        );
}

#[test]
fn too_few_lines() {
    cnfstat()
        .write_stdin("p cnf 2 2\n1 2 0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("only has 1 clause lines"));
}

#[test]
fn missing_terminator() {
    cnfstat()
        .write_stdin("p cnf 2 1\n1 00\n")
        .assert()
        .failure()
        .stdout("")
        .stderr("Error: line 2 does not end with 0\n");
}

#[test]
fn out_of_bounds() {
    cnfstat()
        .write_stdin("p cnf 2 1\n3 0\n")
        .assert()
        .failure()
        .stderr("Error: line 2 contains number 3 out of bounds [-2, 2]\n");
}

#[test]
fn non_integer_token() {
    cnfstat()
        .write_stdin("p cnf 2 1\n1 a 0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-integer value 'a'"));
}

#[test]
fn empty_input() {
    cnfstat()
        .write_stdin("")
        .assert()
        .failure()
        .stderr("Error: file is empty\n");
}

#[test]
fn bad_header() {
    cnfstat()
        .write_stdin("p dnf 2 1\n1 0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid header"));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.cnf");
    cnfstat()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(
            predicate::str::contains("not found").and(predicate::str::contains("absent.cnf")),
        );
}

#[test]
fn directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    cnfstat()
        .arg(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(
            predicate::str::contains("not found").and(predicate::str::contains("directory")),
        )
        .stderr(predicate::str::contains("read line").not());
}
