//! Integration tests for tabelle.

mod util;

mod arg_tests;
mod invalid_config_tests;
