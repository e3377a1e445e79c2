//! Member extraction from a located enum block.
//!
//! Only members of the form `<prefix>_NAME = <digits>` are recognised, each
//! starting a line (or directly following the opening brace) and ending the
//! line (or directly preceding the closing brace). A member's documentation is
//! either the `//` comment on its own line or the run of `//` lines directly
//! above it.

use regex::Regex;

use crate::error::GenerateError;
use crate::header::enum_block::EnumBlock;

/// One enum member in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    /// C identifier, e.g. `heif_error_Ok`
    pub raw_name: String,
    /// Comment text with the `//` marker removed and each line trimmed
    pub comment_lines: Vec<String>,
}

impl EnumMember {
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            comment_lines: Vec::new(),
        }
    }

    pub fn with_comment(mut self, lines: &[&str]) -> Self {
        self.comment_lines = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Comment as emitted above the constant, one `\t// ` line per source line
    pub fn rendered_comment(&self) -> Option<String> {
        if self.comment_lines.is_empty() {
            return None;
        }
        let lines: Vec<String> = self
            .comment_lines
            .iter()
            .map(|line| format!("\t// {}", line))
            .collect();
        Some(lines.join("\n"))
    }
}

fn member_regex(member_prefix: &str) -> Result<Regex, GenerateError> {
    let pattern = format!(
        r"(?m)(?:^|\{{)[ \t]*({}_[^=\s]+)\s*=\s*\d+[ \t]*(?:,?[ \t]*(?:\n|\}})|,?[ \t]*//\s*([^\n]+))",
        regex::escape(member_prefix)
    );
    Regex::new(&pattern)
        .map_err(|e| GenerateError::InvalidConfig(format!("bad member prefix {}: {}", member_prefix, e)))
}

/// Walk `block` and collect every member whose name starts with `<member_prefix>_`.
///
/// Members are returned in textual order. Duplicate names are kept as they
/// appear in the header.
pub fn extract_members(
    header: &str,
    block: &EnumBlock,
    member_prefix: &str,
) -> Result<Vec<EnumMember>, GenerateError> {
    let regex = member_regex(member_prefix)?;
    let haystack = &header[..block.end];

    let mut members = Vec::new();
    let mut cursor = block.start;
    // Lower bound for preceding comments, so a line is never attributed twice
    let mut comment_floor = block.members_start;

    while cursor < block.end {
        let Some(caps) = regex.captures_at(haystack, cursor) else {
            break;
        };
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let comment_lines = match caps.get(2) {
            Some(same_line) => vec![same_line.as_str().trim().to_string()],
            None => preceding_comment(header, comment_floor, whole.start()),
        };

        members.push(EnumMember {
            raw_name: name.as_str().to_string(),
            comment_lines,
        });

        cursor = whole.end();
        comment_floor = whole.end();
    }

    tracing::debug!(
        prefix = member_prefix,
        count = members.len(),
        "Extracted enum members"
    );

    Ok(members)
}

/// Collect the consecutive `//` lines that end right before `member_start`.
fn preceding_comment(header: &str, floor: usize, member_start: usize) -> Vec<String> {
    let mut end = member_start;
    if header[..end].ends_with(&[' ', '\n', '\r', '\t'][..]) {
        end -= 1;
    }
    if floor >= end {
        return Vec::new();
    }

    let mut lines: Vec<String> = header[floor..end]
        .split('\n')
        .rev()
        .map_while(|line| line.trim().strip_prefix("//"))
        .map(|text| text.trim().to_string())
        .collect();
    lines.reverse();
    lines
}
