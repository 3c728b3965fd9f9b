//! Integration tests for roster
//!
//! These tests drive the whole app through key and mouse events and read
//! the rendered screen back.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod properties;
pub mod rendering;
pub mod roster_flow;
