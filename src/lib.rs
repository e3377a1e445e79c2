//! # heifdefs: Go constants from the libheif headers
//!
//! Scans `heif.h` for a fixed set of enums and `heif_version.h` for the
//! numeric version, then writes a Go source file for the cgo binding with one
//! named type and one aligned `const` block per enum.
//!
//! ## Example
//!
//! ```no_run
//! use heifdefs::{generate_file, GeneratorConfig};
//!
//! let summary = generate_file(&GeneratorConfig::default(), "defines.go")?;
//! println!("{} constants for libheif {}", summary.constant_count(), summary.build_version);
//! # Ok::<(), heifdefs::GenerateError>(())
//! ```
//!
//! ## Pipeline
//!
//! - `header::version`: `#define LIBHEIF_NUMERIC_VERSION (...)` expression
//! - `header::enum_block`: span of `enum <name> { ... };`
//! - `header::members`: member names and their `//` comments
//! - `codegen::transcode`: `heif_error_Ok` -> `ErrorOK`
//! - `codegen::emitter`: `type` declaration and aligned `const` block

pub mod codegen;
pub mod config;
pub mod driver;
pub mod error;
pub mod header;

pub use codegen::{transcode, transcode_type_name, Declaration};
pub use config::{EnumFamily, GeneratorConfig};
pub use driver::{generate_file, generate_source, DeclarationSummary, GenerationSummary};
pub use error::GenerateError;
pub use header::{extract_members, extract_version, locate_enum, EnumBlock, EnumMember};
