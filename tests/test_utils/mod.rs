//! Shared test helpers
//!
//! Included from test targets with `#[path = "../test_utils/mod.rs"]`.

#![allow(dead_code)]

pub mod fixtures;
