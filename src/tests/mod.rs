//! Internal test modules - whitebox tests with crate access
//!
//! This module contains tests that require internal access to crate types.
//! Tests here can access private items and implementation details for
//! comprehensive validation of internal invariants and edge cases.

mod acceptance_search;
