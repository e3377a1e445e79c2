//! Locates a named enum definition inside raw header text.

use regex::Regex;

use crate::error::GenerateError;

/// Byte offsets of one `enum <name> { ... };` definition.
///
/// `start..end` covers the whole match including the leading and trailing
/// newline. `members_start` sits after the opening brace and any whitespace
/// following it; it is the lower bound for preceding-comment lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumBlock {
    pub start: usize,
    pub end: usize,
    pub open_brace: usize,
    pub close_brace: usize,
    pub members_start: usize,
}

impl EnumBlock {
    /// Text of the whole match
    pub fn text<'a>(&self, header: &'a str) -> &'a str {
        &header[self.start..self.end]
    }

    /// Text from the opening to the closing brace, both included
    pub fn braced<'a>(&self, header: &'a str) -> &'a str {
        &header[self.open_brace..=self.close_brace]
    }
}

/// Find the first definition of `enum <name>` at the start of a line.
///
/// The member list ends at the first `}`; nested braces are not supported.
pub fn locate_enum(header: &str, name: &str) -> Result<EnumBlock, GenerateError> {
    let pattern = format!(
        r"\nenum {}\s*(?P<open>\{{)\s*(?P<body>[^}}]*)(?P<close>\}});\n",
        regex::escape(name)
    );
    let regex = Regex::new(&pattern)
        .map_err(|e| GenerateError::InvalidConfig(format!("bad enum name {}: {}", name, e)))?;

    let not_found = || GenerateError::EnumNotFound {
        name: name.to_string(),
    };
    let caps = regex.captures(header).ok_or_else(not_found)?;
    let (whole, open, body, close) = match (caps.get(0), caps.name("open"), caps.name("body"), caps.name("close")) {
        (Some(whole), Some(open), Some(body), Some(close)) => (whole, open, body, close),
        _ => return Err(not_found()),
    };

    Ok(EnumBlock {
        start: whole.start(),
        end: whole.end(),
        open_brace: open.start(),
        close_brace: close.start(),
        members_start: body.start(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_single_line_enum() {
        let header = "int x;\nenum foo { A = 1, B = 2 };\nint y;\n";
        let block = locate_enum(header, "foo").unwrap();

        assert_eq!(block.text(header), "\nenum foo { A = 1, B = 2 };\n");
        assert_eq!(block.braced(header), "{ A = 1, B = 2 }");
        assert_eq!(&header[block.members_start..], "A = 1, B = 2 };\nint y;\n");
    }

    #[test]
    fn test_members_start_skips_newlines() {
        let header = "\nenum heif_channel\n{\n\n  heif_channel_Y = 0\n};\n";
        let block = locate_enum(header, "heif_channel").unwrap();
        assert!(header[block.members_start..].starts_with("heif_channel_Y"));
        assert_eq!(block.end, header.len());
    }

    #[test]
    fn test_name_must_match_exactly() {
        let header = "\nenum heif_chroma_downsampling_algorithm {\n  heif_chroma_downsampling_average = 1\n};\n";
        let err = locate_enum(header, "heif_chroma").unwrap_err();
        assert!(matches!(err, GenerateError::EnumNotFound { ref name } if name == "heif_chroma"));
    }

    #[test]
    fn test_first_definition_wins() {
        let header = "\nenum foo { A = 1 };\n\nenum foo { B = 2 };\n";
        let block = locate_enum(header, "foo").unwrap();
        assert_eq!(block.braced(header), "{ A = 1 }");
    }

    #[test]
    fn test_requires_line_start() {
        let header = "typedef enum foo { A = 1 };\n";
        assert!(locate_enum(header, "foo").is_err());
    }
}
