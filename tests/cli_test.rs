//! Integration tests for the cmlint CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn cmlint() -> Command {
    Command::cargo_bin("cmlint").unwrap()
}

fn package(temp: &TempDir, name: &str, listfile: &str) -> PathBuf {
    let dir = temp.path().join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("CMakeLists.txt"), listfile).unwrap();
    dir
}

const CLEAN: &str = "cmake_minimum_required(VERSION 3.10)\nproject(clean VERSION 1.0)\n";

#[test]
fn cli_shows_help() {
    cmlint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CMake package linter"));
}

#[test]
fn cli_shows_version() {
    cmlint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn clean_package_reports_no_issues() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "clean", CLEAN);

    cmlint()
        .args(["check", dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 'clean' in"))
        .stdout(predicate::str::contains("Found no issues"))
        .stderr(predicate::str::contains(
            "checked 1 packages and found 0 problems",
        ));
}

#[test]
fn broken_package_fails_with_error_line() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "broken", "cmake_minimum_required(VERSION 3.10)\n");

    cmlint()
        .args(["check", dir.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error: missing project()"))
        .stdout(predicate::str::contains("Found 1 error(s)"));
}

#[test]
fn quiet_suppresses_summary_but_not_exit_code() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "broken", "cmake_minimum_required(VERSION 3.10)\n");

    cmlint()
        .args(["--quiet", "check", dir.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("checked").not());
}

#[test]
fn notice_is_hidden_at_default_threshold_with_hint() {
    let temp = TempDir::new().unwrap();
    // Project name differs from directory name: a notice-level finding.
    let dir = package(
        &temp,
        "demo",
        "cmake_minimum_required(VERSION 3.10)\nproject(other VERSION 1.0)\n",
    );

    cmlint()
        .args(["check", dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("project_name_mismatch").not())
        .stdout(predicate::str::contains("Found no issues"))
        .stderr(predicate::str::contains(
            "option -W2 will show 1 additional notices",
        ));
}

#[test]
fn raised_threshold_reveals_notice_as_skipped() {
    let temp = TempDir::new().unwrap();
    let dir = package(
        &temp,
        "demo",
        "cmake_minimum_required(VERSION 3.10)\nproject(other VERSION 1.0)\n",
    );

    cmlint()
        .args(["check", "-W", "2", dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("notice: project name 'other'"))
        .stdout(predicate::str::contains("Found 1 skipped test(s)"));
}

#[test]
fn strict_mode_fails_on_notices_without_relabeling() {
    let temp = TempDir::new().unwrap();
    let dir = package(
        &temp,
        "demo",
        "cmake_minimum_required(VERSION 3.10)\nproject(other VERSION 1.0)\n",
    );

    cmlint()
        .args(["check", "-W", "2", "--strict", dir.to_str().unwrap()])
        .assert()
        .code(1)
        // The display label stays a notice even though it fails the run.
        .stdout(predicate::str::contains("notice: project name 'other'"));
}

#[test]
fn ignored_messages_are_counted_on_stderr() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "broken", "cmake_minimum_required(VERSION 3.10)\n");

    cmlint()
        .args([
            "check",
            "--ignore",
            "missing_project",
            dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "1 messages have been ignored. Use --show-ignored to see them",
        ));
}

#[test]
fn show_ignored_reveals_suppressed_messages() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "broken", "cmake_minimum_required(VERSION 3.10)\n");

    cmlint()
        .args([
            "check",
            "--ignore",
            "missing_project",
            "--show-ignored",
            dir.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error: missing project()"));
}

#[test]
fn explained_format_appends_explanations() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "broken", "cmake_minimum_required(VERSION 3.10)\n");

    cmlint()
        .args([
            "--quiet",
            "check",
            "--format",
            "explained",
            dir.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must declare a project"));
}

#[test]
fn json_format_emits_parseable_document() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "clean", CLEAN);

    let output = cmlint()
        .args(["--quiet", "check", "--format", "json", dir.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["name"], "clean");
    assert_eq!(parsed["tests"], 1);
    assert_eq!(parsed["success"], 1);
}

#[test]
fn xml_format_emits_declaration_and_suite() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "clean", CLEAN);

    cmlint()
        .args(["--quiet", "check", "--format", "xml", dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
        ))
        .stdout(predicate::str::contains("<testsuite name=\"clean\""))
        .stdout(predicate::str::contains("success=\"1\""));
}

#[test]
fn output_file_writes_junit_alongside_text() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "clean", CLEAN);
    let report = temp.path().join("report.xml");

    cmlint()
        .args([
            "--quiet",
            "check",
            "--output-file",
            report.to_str().unwrap(),
            dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found no issues"));

    let xml = fs::read_to_string(&report).unwrap();
    assert!(xml.contains("<testcase name=\"clean\"/>"));
}

#[test]
fn one_error_one_notice_scenario_renders_consistently() {
    let temp = TempDir::new().unwrap();
    let dir = package(
        &temp,
        "demo",
        "cmake_minimum_required(VERSION 3.10)\nproject(scen VERSION 1.0)\nadd_executable(app main.c)\n",
    );
    let report = temp.path().join("report.xml");

    // Text view: one error, one skipped notice.
    cmlint()
        .args([
            "--quiet",
            "check",
            "-W",
            "2",
            "--output-file",
            report.to_str().unwrap(),
            dir.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "scen: CMakeLists.txt(3): error: source file 'main.c' does not exist",
        ))
        .stdout(predicate::str::contains(
            "Found 1 error(s), 0 failure(s), 1 skipped test(s)",
        ));

    // Structured view agrees on the counts.
    let xml = fs::read_to_string(&report).unwrap();
    assert!(xml.contains("tests=\"2\""));
    assert!(xml.contains("errors=\"1\""));
    assert!(xml.contains("failures=\"0\""));
    assert!(xml.contains("skipped=\"1\""));
    assert!(xml.contains("success=\"0\""));
    assert!(xml.contains("<testcase name=\"scen:CMakeLists.txt(3)\">"));
    assert_eq!(xml.matches("<testcase").count(), 2);
}

#[test]
fn color_never_emits_no_ansi() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "broken", "cmake_minimum_required(VERSION 3.10)\n");

    let output = cmlint()
        .args([
            "--quiet",
            "check",
            "--color",
            "never",
            dir.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    assert!(!output.contains(&b'\x1b'));
}

#[test]
fn color_always_emits_ansi_even_when_piped() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "broken", "cmake_minimum_required(VERSION 3.10)\n");

    let output = cmlint()
        .args([
            "--quiet",
            "check",
            "--color",
            "always",
            dir.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    assert!(output.contains(&b'\x1b'));
}

#[test]
fn json_output_never_contains_ansi_regardless_of_color() {
    let temp = TempDir::new().unwrap();
    let dir = package(&temp, "broken", "cmake_minimum_required(VERSION 3.10)\n");

    let output = cmlint()
        .args([
            "--quiet",
            "check",
            "--format",
            "json",
            "--color",
            "always",
            dir.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    assert!(!output.contains(&b'\x1b'));
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["errors"], 1);
}

#[test]
fn multiple_packages_are_checked_in_order() {
    let temp = TempDir::new().unwrap();
    let first = package(&temp, "alpha", "cmake_minimum_required(VERSION 3.10)\nproject(alpha)\n");
    let second = package(&temp, "beta", "cmake_minimum_required(VERSION 3.10)\nproject(beta)\n");

    cmlint()
        .args([
            "check",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 'alpha'"))
        .stdout(predicate::str::contains("Checked 'beta'"))
        .stderr(predicate::str::contains("checked 2 packages"));
}

#[test]
fn nonexistent_path_warns_but_checks_the_rest() {
    let temp = TempDir::new().unwrap();
    let good = package(&temp, "clean", CLEAN);
    let bad = temp.path().join("missing");

    cmlint()
        .args(["check", bad.to_str().unwrap(), good.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("not a package"))
        .stderr(predicate::str::contains("checked 1 packages"));
}

#[test]
fn no_checkable_packages_fails() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("missing");

    cmlint()
        .args(["check", bad.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no packages to check"));
}

#[test]
fn config_file_format_is_validated_before_checking() {
    let temp = TempDir::new().unwrap();
    package(&temp, "clean", CLEAN);
    fs::write(temp.path().join(".cmlint.yml"), "format: csv\n").unwrap();

    cmlint()
        .current_dir(temp.path())
        .args(["check", "clean"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown output format: csv"));
}

#[test]
fn config_file_threshold_applies() {
    let temp = TempDir::new().unwrap();
    let dir = package(
        &temp,
        "demo",
        "cmake_minimum_required(VERSION 3.10)\nproject(other VERSION 1.0)\n",
    );
    fs::write(temp.path().join(".cmlint.yml"), "severity_level: 2\n").unwrap();

    cmlint()
        .current_dir(temp.path())
        .args(["--quiet", "check", dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 skipped test(s)"));
}

#[test]
fn rules_lists_builtin_checks() {
    cmlint()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("missing_project"))
        .stdout(predicate::str::contains("missing_source_file"))
        .stdout(predicate::str::contains("[error]"));
}

#[test]
fn rules_json_is_parseable() {
    let output = cmlint()
        .args(["rules", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed.as_array().unwrap().len() >= 6);
}

#[test]
fn completions_generates_bash_script() {
    cmlint()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cmlint"));
}
