//! Integration tests for the carousel demos.

mod util;

mod arg_tests;
mod config_tests;
mod invalid_config_tests;
