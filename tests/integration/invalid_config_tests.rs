//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::demo_command;

#[test]
fn test_toml_mismatch_type() {
    demo_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_invalid_colour() {
    demo_command(&["-C", "./tests/invalid_configs/invalid_colour.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'not-a-colour' is an invalid colour for item 'Aurora'",
        ));
}

#[test]
fn test_negative_spacing() {
    demo_command(&["-C", "./tests/invalid_configs/negative_spacing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'spacing' must be at least 0."));
}

#[test]
fn test_invalid_auto_scroll() {
    demo_command(&["-C", "./tests/invalid_configs/invalid_auto_scroll.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'auto_scroll' was set with an invalid value",
        ));
}

#[test]
fn test_missing_item_label() {
    demo_command(&["-C", "./tests/invalid_configs/missing_label.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing field"));
}

#[test]
fn test_small_item_height() {
    demo_command(&["-C", "./tests/invalid_configs/small_item_height.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'item_height' must be at least 3."));
}

#[test]
fn test_out_of_bounds_index() {
    demo_command(&["-C", "./tests/invalid_configs/out_of_bounds_index.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "index '2' is out of bounds for a carousel with 2 item(s)",
        ));
}

/// Arguments win over the config file, so a bad value in the file doesn't
/// matter if it's overridden.
#[test]
fn test_arguments_override_bad_config() {
    demo_command(&[
        "-C",
        "./tests/invalid_configs/negative_spacing.toml",
        "--spacing",
        "2",
        "--index",
        "99",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("out of bounds"))
    .stderr(predicate::str::contains("spacing").not());
}
