// Integration tests for the binary using assert_cmd.
// A map is written to a temp file and commands are fed on stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

const BIN: &str = "langton_ant";

fn map_file(contents: &str) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    write!(f, "{contents}")?;
    Ok(f)
}

#[test]
fn prints_map_position_and_field() -> Result<(), Box<dyn std::error::Error>> {
    let f = map_file("000\n0N0\n001\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(f.path()).arg("--no-color");

    cmd.write_stdin("print\nposition\nfield 2,2\nfield 1,1\nquit\n")
        .assert()
        .success()
        .stdout("000\n0n0\n001\n1,1\n1\nn\n")
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn moves_inside_the_map() -> Result<(), Box<dyn std::error::Error>> {
    let f = map_file("000\n0N0\n000\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(f.path()).arg("--no-color");

    cmd.write_stdin("move 2\nprint\nposition\nmove 0\nposition\n")
        .assert()
        .success()
        .stdout("01S\n000\n000\n0,2\n0,2\n");

    Ok(())
}

#[test]
fn invalid_input_reports_errors_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    let f = map_file("N0\n00\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(f.path()).arg("--no-color");

    cmd.write_stdin("fly\nmove\nmove -1\nmove x\nfield 1,2,3\nposition\n")
        .assert()
        .success()
        .stdout("0,0\n")
        .stderr(contains("Error, Command 'fly' not found!"))
        .stderr(contains(
            "Error, Wrong number of arguments for command 'move'! Expected 1 but got 0.",
        ))
        .stderr(contains("Error, the amount of moves must be a non-negative integer."))
        .stderr(contains("but was \"1,2,3\""));

    Ok(())
}

#[test]
fn malformed_map_fails_before_reading_commands() -> Result<(), Box<dyn std::error::Error>> {
    let f = map_file("N0\n0S\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(f.path()).arg("--no-color");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("more than one ant"));

    Ok(())
}

#[test]
fn missing_map_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("/no/such/map.in");

    cmd.assert().failure().stderr(contains("failed to read map"));

    Ok(())
}

#[test]
fn non_utf8_line_does_not_end_session() -> Result<(), Box<dyn std::error::Error>> {
    let f = map_file("N0\n00\n")?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(f.path()).arg("--no-color");

    cmd.write_stdin(&b"mo\xffve 1\nposition\n"[..])
        .assert()
        .success()
        .stdout("0,0\n")
        .stderr(contains("Error, Command 'mo"))
        .stderr(contains("' not found!"));

    Ok(())
}
