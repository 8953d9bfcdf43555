use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn pathsuggest() -> Command {
    Command::cargo_bin("pathsuggest").expect("binary should be built")
}

fn fixture_home() -> TempDir {
    let home = TempDir::new().expect("failed to create temp dir");
    fs::create_dir(home.path().join("Documents")).expect("failed to create dir");
    fs::create_dir(home.path().join("Downloads")).expect("failed to create dir");
    fs::create_dir(home.path().join("Music")).expect("failed to create dir");
    fs::write(home.path().join(".bashrc"), "").expect("failed to write file");

    home
}

fn home_arg(home: &TempDir) -> String {
    home.path().to_string_lossy().to_string()
}

#[test]
fn test_complete_prints_shorthand_suggestions() {
    // Arrange
    let home = fixture_home();

    // Act
    let assert = pathsuggest()
        .args(["complete", "~/", "--home", &home_arg(&home)])
        .assert();

    // Assert
    assert
        .success()
        .stdout("~/Documents/\n~/Downloads/\n~/Music/\n");
}

#[test]
fn test_complete_filters_by_prefix_and_limits_results() {
    // Arrange
    let home = fixture_home();
    let input = format!("{}/D", home_arg(&home));

    // Act
    let assert = pathsuggest()
        .args(["complete", &input, "--max-results", "1"])
        .assert();

    // Assert
    assert
        .success()
        .stdout(format!("{}/Documents/\n", home_arg(&home)));
}

#[test]
fn test_complete_missing_directory_prints_nothing() {
    // Arrange
    let home = fixture_home();
    let input = format!("{}/missing/", home_arg(&home));

    // Act
    let assert = pathsuggest().args(["complete", &input]).assert();

    // Assert
    assert.success().stdout("");
}

#[test]
fn test_boundary_expands_shorthand() {
    // Arrange
    let args = ["boundary", "~/projects/my", "--home", "/home/user"];

    // Act
    let assert = pathsuggest().args(args).assert();

    // Assert
    assert.success().stdout("/home/user/projects/\n");
}

#[test]
fn test_log_file_receives_debug_events() {
    // Arrange
    let home = fixture_home();
    let log_path = home.path().join("pathsuggest.log");
    let log_arg = log_path.to_string_lossy().to_string();
    let input = format!("{}/missing/", home_arg(&home));

    // Act
    pathsuggest()
        .args(["complete", &input, "--log-file", &log_arg])
        .assert()
        .success();

    // Assert
    let log = fs::read_to_string(&log_path).expect("failed to read log");
    assert!(log.contains("directory listing failed"));
}
