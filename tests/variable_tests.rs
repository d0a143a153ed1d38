//! Integration tests for variable management

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{daytrack_cmd, init_store, run_ok};

#[test]
fn test_add_numeric_and_categorical() {
    let temp = init_store();

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "add", "Body Weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added numeric variable body_weight"));

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "add", "mood", "-c", "good", "-c", "bad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added categorical variable mood"));

    assert_eq!(
        fs::read_to_string(temp.path().join("variables/active/body_weight.csv")).unwrap(),
        "ID\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("variables/active/mood.csv")).unwrap(),
        "ID,good,bad\n"
    );
}

#[test]
fn test_add_duplicate_fails() {
    let temp = init_store();
    run_ok(&temp, &["var", "add", "weight"]);

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "add", "Weight"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Variable already exists: weight"));
}

#[test]
fn test_add_name_without_letters_fails() {
    let temp = init_store();

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "add", "!!!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name"));
}

#[test]
fn test_add_duplicate_category_fails() {
    let temp = init_store();

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "add", "mood", "-c", "good", "-c", "Good"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Duplicate category: good"));

    assert!(!temp.path().join("variables/active/mood.csv").exists());
}

#[test]
fn test_list_sections() {
    let temp = init_store();
    run_ok(&temp, &["var", "add", "weight"]);
    run_ok(&temp, &["var", "add", "sleep"]);
    run_ok(&temp, &["var", "move", "sleep"]);

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "list"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "ACTIVE:\n  weight\nINACTIVE:\n  sleep\n",
        ));

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "list", "--inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weight").not());
}

#[test]
fn test_list_empty_store() {
    let temp = init_store();

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "list", "--active"])
        .assert()
        .success()
        .stdout(predicate::str::diff("ACTIVE:\n  None\n"));
}

#[test]
fn test_move_toggles_location() {
    let temp = init_store();
    run_ok(&temp, &["var", "add", "weight"]);

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "move", "weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weight is now inactive"));
    assert!(temp.path().join("variables/inactive/weight.csv").exists());
    assert!(!temp.path().join("variables/active/weight.csv").exists());

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "move", "weight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weight is now active"));
    assert!(temp.path().join("variables/active/weight.csv").exists());
}

#[test]
fn test_move_missing_variable_fails() {
    let temp = init_store();

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "move", "ghost"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("daytrack var list"));
}

#[test]
fn test_show_variable() {
    let temp = init_store();
    run_ok(&temp, &["var", "add", "mood", "-c", "good", "-c", "bad"]);

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "show", "mood"])
        .assert()
        .success()
        .stdout(predicate::str::contains("location = active"))
        .stdout(predicate::str::contains("categorical (good, bad)"))
        .stdout(predicate::str::contains("entries  = 0"));
}

#[test]
fn test_rename_variable() {
    let temp = init_store();
    run_ok(&temp, &["var", "add", "weight"]);
    run_ok(&temp, &["var", "add", "mood", "-c", "good"]);

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "rename", "weight", "Body Mass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed weight to body_mass"));

    assert!(temp.path().join("variables/active/body_mass.csv").exists());
    assert!(!temp.path().join("variables/active/weight.csv").exists());

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "rename", "body_mass", "mood"])
        .assert()
        .code(5);
}

#[test]
fn test_delete_refused_with_entries() {
    let temp = init_store();
    run_ok(&temp, &["var", "add", "weight"]);
    run_ok(&temp, &["add", "--date", "01.01.2024", "weight=70"]);

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "delete", "weight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variable weight has 1 entries"))
        .stderr(predicate::str::contains("--force"));
    assert!(temp.path().join("variables/active/weight.csv").exists());

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "delete", "weight", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted weight"));
    assert!(!temp.path().join("variables/active/weight.csv").exists());
}

#[test]
fn test_delete_empty_variable() {
    let temp = init_store();
    run_ok(&temp, &["var", "add", "sleep"]);
    run_ok(&temp, &["var", "move", "sleep"]);

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "delete", "sleep"])
        .assert()
        .success();
    assert!(!temp.path().join("variables/inactive/sleep.csv").exists());

    daytrack_cmd()
        .current_dir(temp.path())
        .args(["var", "delete", "sleep"])
        .assert()
        .code(4);
}
