#![allow(unused_imports)]
//! Shared test utilities for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: schema directories, sample addresses and argument bundles
//! - `assertions`: assertion helpers with better failure messages

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_err, assert_error_contains, assert_ok};
pub use fixtures::{addr, json_args, long_auth_key, schema_dir_with, VAULT_SCHEMA};
