pub use wastegraph_core::format::OutputFormat;
use clap::builder::{PossibleValuesParser, TypedValueParser};

/// Names accepted by `--format`, in help order
pub const FORMAT_NAMES: [&str; 3] = ["human", "json", "records"];

/// Value parser for `--format`
///
/// `OutputFormat` lives in the core crate, so clap sees it through its
/// `FromStr` impl instead of a `ValueEnum` derive.
pub fn format_parser() -> impl TypedValueParser<Value = OutputFormat> {
    PossibleValuesParser::new(FORMAT_NAMES).try_map(|name| name.parse::<OutputFormat>())
}
