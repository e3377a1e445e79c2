//! Numeric version extraction from `heif_version.h`.

use regex::Regex;

use crate::error::GenerateError;

/// Default macro carrying the packed library version
pub const NUMERIC_VERSION_MACRO: &str = "LIBHEIF_NUMERIC_VERSION";

/// Extract the expression of `#define <macro_name> (<expr>)` from a version header.
///
/// The captured expression is trimmed, runs of spaces are collapsed and a
/// trailing ` | 0` is dropped, so
/// `#define LIBHEIF_NUMERIC_VERSION ((1<<24) | (17<<16) | (6<<8) | 0)`
/// yields `(1<<24) | (17<<16) | (6<<8)`.
pub fn extract_version(version_header: &str, macro_name: &str) -> Result<String, GenerateError> {
    let pattern = format!(
        r"(?m)^#define\s+{}\s+\((.+)\)$",
        regex::escape(macro_name)
    );
    let regex = Regex::new(&pattern)
        .map_err(|e| GenerateError::InvalidConfig(format!("bad version macro {}: {}", macro_name, e)))?;

    let captured = regex
        .captures(version_header)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| GenerateError::VersionNotFound {
            macro_name: macro_name.to_string(),
        })?;

    Ok(normalize_expression(captured.as_str()))
}

fn normalize_expression(expr: &str) -> String {
    let mut version = expr.trim().to_string();
    while version.contains("  ") {
        version = version.replace("  ", " ");
    }
    match version.strip_suffix(" | 0") {
        Some(stripped) => stripped.to_string(),
        None => version,
    }
}
