//! Shared test utilities for roster
//!
//! This module provides common helpers for integration tests:
//! - Deterministic ids, timestamps and record fixtures
//! - TUI terminal testing helpers
//! - Driving the app with synthetic key and mouse events

pub mod determinism;
pub mod driver;
pub mod terminal;
