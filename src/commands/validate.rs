//! `wastegraph validate` - structural checks on the graph document

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use wastegraph_core::error::Result;
use wastegraph_core::graph::algos::{Severity, ValidationReport};
use wastegraph_core::graph::validate;
use wastegraph_core::records::escape_quotes;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let document = ctx.load_document()?;
    let report = validate(&document.nodes, &document.edges);

    match ctx.cli.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Human => print_human(&report, ctx.cli.quiet),
        OutputFormat::Records => {
            print_records_header("validate", &header_fields(&report));
            print_records_lines(&report);
        }
    }

    Ok(())
}

pub(crate) fn header_fields(report: &ValidationReport) -> Vec<(&'static str, String)> {
    vec![
        ("valid", report.is_valid.to_string()),
        ("nodes", report.stats.nodes.to_string()),
        ("edges", report.stats.edges.to_string()),
        ("errors", report.errors.len().to_string()),
        ("warnings", report.warnings.len().to_string()),
    ]
}

pub(crate) fn print_human(report: &ValidationReport, quiet: bool) {
    let stats = &report.stats;

    if report.errors.is_empty() && report.warnings.is_empty() {
        if !quiet {
            println!(
                "Graph is valid ({} nodes, {} edges)",
                stats.nodes, stats.edges
            );
        }
        return;
    }

    println!(
        "Found {} issue(s) in graph ({} nodes, {} edges):",
        report.errors.len() + report.warnings.len(),
        stats.nodes,
        stats.edges
    );
    println!();

    for issue in report.issues() {
        let severity_prefix = match issue.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        println!("  {} [{}] {}", severity_prefix, issue.kind, issue.message);
    }

    println!();
    println!(
        "Summary: {} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );
    println!(
        "Graph is {}",
        if report.is_valid { "valid" } else { "invalid" }
    );
}

pub(crate) fn print_records_lines(report: &ValidationReport) {
    for issue in report.issues() {
        let node_part = issue
            .node_id
            .as_ref()
            .map(|id| format!(" node={}", id))
            .unwrap_or_default();
        let edge_part = issue
            .edge_index
            .map(|i| format!(" edge={}", i))
            .unwrap_or_default();

        println!(
            "D {} {} \"{}\"{}{}",
            issue.severity,
            issue.kind,
            escape_quotes(&issue.message),
            node_part,
            edge_part
        );
    }
}
