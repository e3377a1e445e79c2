//! The enum families exported to Go and the member prefixes they use.

use serde::{Deserialize, Serialize};

/// Enum type name -> prefix its members are declared with, where the two differ
pub const MEMBER_PREFIX_REMAP: &[(&str, &str)] = &[
    ("heif_error_code", "heif_error"),
    ("heif_suberror_code", "heif_suberror"),
    ("heif_compression_format", "heif_compression"),
    ("heif_chroma_downsampling_algorithm", "heif_chroma_downsampling"),
    ("heif_chroma_upsampling_algorithm", "heif_chroma_upsampling"),
];

/// Enums generated by default, in output order
pub const DEFAULT_ENUMS: &[&str] = &[
    "heif_error_code",
    "heif_suberror_code",
    "heif_compression_format",
    "heif_chroma",
    "heif_colorspace",
    "heif_channel",
    "heif_progress_step",
    "heif_chroma_downsampling_algorithm",
    "heif_chroma_upsampling_algorithm",
];

/// A C enum together with the prefix shared by its members
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnumFamily {
    pub name: String,
    /// Overrides the remap table; defaults to the table entry or `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_prefix: Option<String>,
}

impl EnumFamily {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            member_prefix: None,
        }
    }

    /// Prefix used to match member names inside the enum body
    pub fn member_prefix(&self) -> &str {
        if let Some(ref prefix) = self.member_prefix {
            return prefix;
        }
        remapped_prefix(&self.name)
    }
}

/// Look up the member prefix for an enum name, falling back to the name itself
pub fn remapped_prefix(enum_name: &str) -> &str {
    MEMBER_PREFIX_REMAP
        .iter()
        .find(|(name, _)| *name == enum_name)
        .map(|(_, prefix)| *prefix)
        .unwrap_or(enum_name)
}

pub fn default_families() -> Vec<EnumFamily> {
    DEFAULT_ENUMS.iter().map(|name| EnumFamily::new(*name)).collect()
}
