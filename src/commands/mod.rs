//! Command implementations for wastegraph

pub mod delete;
pub mod dispatch;
pub mod distances;
pub mod format;
pub mod init;
pub mod list;
pub mod paths;
pub mod reset;
pub mod route;
pub mod save;
pub mod schedule;
pub mod selftest;
pub mod show;
pub mod validate;
