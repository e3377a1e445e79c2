//! Narrow pattern-based scanner over the libheif public headers.
//!
//! This is not a C parser: it only understands `#define NAME (expr)` lines and
//! `enum name { prefix_member = <digits>, ... };` blocks with `//` comments.

pub mod enum_block;
pub mod members;
pub mod version;

pub use enum_block::{locate_enum, EnumBlock};
pub use members::{extract_members, EnumMember};
pub use version::{extract_version, NUMERIC_VERSION_MACRO};
