//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{gallery_command, no_cfg_demo_command};

#[test]
fn test_help() {
    no_cfg_demo_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Carousel Options"))
        .stdout(predicate::str::contains("--auto-scroll"));
}

#[test]
fn test_gallery_help_uses_its_own_name() {
    gallery_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("carousel-gallery"));
}

#[test]
fn test_negative_spacing() {
    no_cfg_demo_command()
        .arg("--spacing=-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--spacing' must be at least 0."));
}

#[test]
fn test_negative_headspace() {
    no_cfg_demo_command()
        .arg("--headspace=-0.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--headspace' must be at least 0."));
}

#[test]
fn test_invalid_auto_scroll() {
    no_cfg_demo_command()
        .arg("-a")
        .arg("soon")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--auto-scroll' was set with an invalid value",
        ));
}

#[test]
fn test_small_item_height() {
    no_cfg_demo_command()
        .arg("--item-height")
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--item-height' must be at least 3."));
}

#[test]
fn test_non_numeric_scaling() {
    no_cfg_demo_command()
        .arg("--sides-scaling")
        .arg("big")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'big'"));
}

#[test]
fn test_out_of_bounds_index() {
    no_cfg_demo_command()
        .arg("--index")
        .arg("9")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "index '9' is out of bounds for a carousel with 5 item(s)",
        ));
}

#[test]
fn test_gallery_out_of_bounds_index() {
    gallery_command(&["-C", "./tests/valid_configs/empty_config.toml", "-i", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}
