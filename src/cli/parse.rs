use wastegraph_core::bail_invalid;
use wastegraph_core::error::Result;

/// Parse a directional weight override written `U:V=W`
///
/// Endpoints are upper-cased like route endpoints.
pub fn parse_override(s: &str) -> Result<(String, String, i64)> {
    let Some((pair, weight)) = s.split_once('=') else {
        bail_invalid!("override (expected U:V=W)", s);
    };
    let Some((from, to)) = pair.split_once(':') else {
        bail_invalid!("override (expected U:V=W)", s);
    };

    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        bail_invalid!("override endpoint", s);
    }

    let Ok(weight) = weight.trim().parse::<i64>() else {
        bail_invalid!("override weight", weight);
    };

    Ok((from.to_uppercase(), to.to_uppercase(), weight))
}

/// Parse `--max-paths`, which must be at least 1
pub fn parse_max_paths(s: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => bail_invalid!("max paths (expected a positive integer)", s),
    }
}
