//! Utilities for records output format
//!
//! Records are single lines: a one-letter kind, then space separated
//! `key=value` fields. Free text is quoted.

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Header line opening every records document
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H wastegraph=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Render a node sequence as a records field value
pub fn join_path(path: &[String]) -> String {
    path.join(">")
}
