//! Integration tests for the pi binaries

use assert_cmd::Command;
use predicates::prelude::*;

fn bin(name: &str) -> Command {
    Command::cargo_bin(name).unwrap()
}

#[test]
fn test_serial_help() {
    bin("pi-serial")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of series terms"));
}

#[test]
fn test_serial_known_estimate() {
    bin("pi-serial")
        .arg("100")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pi estimate (serial, n=100) = 3.131592903558554",
        ))
        .stdout(predicate::str::is_match(r"elapsed time: \d+\.\d{6} seconds\n$").unwrap());
}

#[test]
fn test_serial_missing_argument_is_usage_error() {
    bin("pi-serial")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_serial_extra_argument_is_usage_error() {
    bin("pi-serial")
        .args(["100", "200"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_serial_rejects_non_numeric_input() {
    bin("pi-serial")
        .arg("many")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_serial_rejects_negative_input() {
    bin("pi-serial")
        .args(["--", "-5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_race_reports_thread_count() {
    bin("pi-race")
        .args(["4", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pi estimate (unsynchronized, n=100000, threads=4) = ",
        ))
        .stdout(predicate::str::contains("elapsed time: "));
}

#[test]
fn test_race_missing_term_count_is_usage_error() {
    bin("pi-race")
        .arg("4")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_mutex_single_thread_matches_serial_output() {
    bin("pi-mutex")
        .args(["1", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pi estimate (mutex, n=100, threads=1) = 3.131592903558554",
        ));
}

#[test]
fn test_mutex_zero_threads_fails_before_running() {
    bin("pi-mutex")
        .args(["0", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("thread count"));
}

#[test]
fn test_mutex_zero_terms() {
    bin("pi-mutex")
        .args(["4", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pi estimate (mutex, n=0, threads=4) = 0.000000000000000"));
}

#[test]
fn test_report_is_exactly_two_lines() {
    bin("pi-mutex")
        .args(["2", "1000"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 2));
}

#[test]
fn test_bench_csv_output() {
    bin("pi-bench")
        .args(["--threads", "2", "--terms", "1000", "--trials", "1", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy,threads,terms,trial,seconds,estimate"))
        .stdout(predicate::str::contains("serial,1,1000,0,"))
        .stdout(predicate::str::contains("mutex,2,1000,0,"))
        .stdout(predicate::str::contains("unsynchronized,2,1000,0,"))
        .stdout(predicate::str::contains("rank-ordered,2,1000,0,"));
}

#[test]
fn test_bench_json_output() {
    bin("pi-bench")
        .args(["--threads", "2", "--terms", "1000", "--trials", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"strategy\": \"serial\""))
        .stdout(predicate::str::contains("\"threads\": 2"));
}
