//! Common test utilities for stacksort CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated stack tree in a temp directory plus CLI helpers
//! - Assertion macros: `assert_output_contains!`, `assert_stacks!`
//! - Fixtures: Reusable Terraform file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
