//! # Devpack CLI Dev Integration Tests
//!
//! File: cli/tests/dev.rs
//!
//! ## Overview
//!
//! Integration tests for `devpack dev` and `devpack install` against
//! temporary projects. The Unix-only tests stand in `true`/`false` for the
//! Python interpreter, so no Python installation is needed.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_dev_refuses_uninstalled_app() {
    let project = project(&single_app_config("python3"));
    write_sources(project.path(), "src/first");

    devpack_in(project.path())
        .arg("dev")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'first' is not installed"))
        .stderr(predicate::str::contains("first.dist-info"));
}

#[test]
fn test_dev_requires_app_choice_with_several_apps() {
    let project = project(
        r#"
[apps.first]
bundle = "com.example"
version = "0.0.1"
sources = ["src/first"]

[apps.second]
bundle = "com.example"
version = "0.0.2"
sources = ["src/second"]
"#,
    );

    devpack_in(project.path())
        .arg("dev")
        .assert()
        .failure()
        .stderr(predicate::str::contains("choose one with --app"));

    devpack_in(project.path())
        .args(["dev", "--app", "fourth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'fourth' is not defined"));
}

#[test]
fn test_dev_rejects_malformed_env_flag() {
    let project = project(&single_app_config("python3"));
    devpack_in(project.path())
        .args(["dev", "-e", "NOEQUALS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected KEY=VALUE"));
}

#[cfg(unix)]
#[test]
fn test_install_then_dev() {
    let project = project(&single_app_config("true"));
    write_sources(project.path(), "src/first");

    devpack_in(project.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("'first' is ready"));
    assert!(project.path().join("src/first.dist-info/METADATA").is_file());

    devpack_in(project.path())
        .args(["dev", "-e", "APP_MODE=debug", "--", "--port", "8080"])
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn test_dev_no_run_with_dependency_update() {
    let project = project(&single_app_config("false"));
    write_sources(project.path(), "src/first");
    fs::create_dir(project.path().join("src/first.dist-info")).unwrap();

    // `false` would fail the launch; --no-run never gets that far.
    devpack_in(project.path())
        .args(["dev", "-d", "--no-run"])
        .assert()
        .success();
    assert!(project.path().join("src/first.dist-info/top_level.txt").is_file());
}

#[cfg(unix)]
#[test]
fn test_dev_reports_launch_failure() {
    let project = project(&single_app_config("false"));
    write_sources(project.path(), "src/first");
    fs::create_dir(project.path().join("src/first.dist-info")).unwrap();

    devpack_in(project.path())
        .arg("dev")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch 'first'"));
}

/// Requires a Python 3 interpreter on PATH.
#[test]
#[ignore]
fn test_dev_runs_python_app() {
    let project = project(&single_app_config("python3"));
    let source = project.path().join("src/first");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("__init__.py"), "").unwrap();
    fs::write(
        source.join("__main__.py"),
        "import os, sys\nprint('mode', os.environ['APP_MODE'], sys.argv[1:])\n",
    )
    .unwrap();

    devpack_in(project.path()).arg("install").assert().success();
    devpack_in(project.path())
        .args(["dev", "-e", "APP_MODE=debug", "--", "serve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode debug ['serve']"));
}
