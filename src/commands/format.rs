//! Shared output helpers for command modules

use serde::Serialize;
use wastegraph_core::error::Result;
use wastegraph_core::records;

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the `H` line that opens a records document
pub fn print_records_header(mode: &str, fields: &[(&str, String)]) {
    println!("{}", records::header(mode, fields));
}

/// `A -> B -> C` for human output
pub fn arrow_path(path: &[String]) -> String {
    path.join(" -> ")
}
