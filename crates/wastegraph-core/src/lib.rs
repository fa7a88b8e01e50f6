//! Wastegraph Core Library
//!
//! Graph algorithms, persistence, and shared plumbing for planning
//! waste-collection routes and schedules.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
