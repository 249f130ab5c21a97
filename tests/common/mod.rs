//! Common test utilities for portalmod integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated source tree and output root in a temp directory,
//!   plus helpers to run the portalmod binary against them
//! - Fixtures: reusable module trees

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
