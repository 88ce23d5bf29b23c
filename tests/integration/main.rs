//! Integration tests

mod advisor_test;
mod common;
mod config_test;
mod dashboard_test;
mod relay_test;
