//! Tests around finding and creating the config file.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{demo_command, no_cfg_demo_command};

/// A missing config file is created with the defaults. The run itself fails
/// on purpose, before the terminal is ever touched.
#[test]
fn test_creates_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("carousel.toml");
    let path_str = path.to_str().unwrap();

    demo_command(&["-C", path_str, "--index", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[carousel]"));
    assert!(written.contains("#auto_scroll"));
}

#[test]
fn test_empty_config_uses_default_items() {
    no_cfg_demo_command()
        .arg("--index")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("with 5 item(s)"));
}
