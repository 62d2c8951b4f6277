//! Test utilities for remedy-application tests
//!
//! Real in-memory adapters from remedy-providers, plus a few providers with
//! controllable timing and failures.

pub mod providers;

pub use fixtures::*;
pub use providers::*;
