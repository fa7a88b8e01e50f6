//! Integration tests for the wastegraph CLI
//!
//! These tests run the wastegraph binary against graph documents written
//! to temporary directories.

mod algorithms;
mod database;
