//! Common test utilities for roster CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated home directory and CLI runner
//! - Assertion macros: `assert_success!`, `assert_failure!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use env::*;
