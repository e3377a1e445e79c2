//! End-to-end generation: read headers, scan each enum, assemble and write the Go file.

use std::fs;
use std::path::Path;

use crate::codegen::{fs_utils, Declaration, Preamble};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::header::{extract_members, extract_version, locate_enum};

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub build_version: String,
    pub declarations: Vec<DeclarationSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSummary {
    pub enum_name: String,
    pub type_name: String,
    pub constant_count: usize,
}

impl GenerationSummary {
    pub fn constant_count(&self) -> usize {
        self.declarations.iter().map(|d| d.constant_count).sum()
    }
}

/// Build the complete Go source from header text.
///
/// Fails on the first enum that cannot be located; nothing is returned for
/// the enums that did succeed.
pub fn generate_source(
    header: &str,
    version_header: &str,
    config: &GeneratorConfig,
) -> Result<(String, GenerationSummary), GenerateError> {
    let build_version = extract_version(version_header, &config.version_macro)?;
    tracing::info!(version = %build_version, "Found library version");

    let mut out = Preamble {
        build_version: &build_version,
    }
    .to_string();
    let mut declarations = Vec::with_capacity(config.enums.len());

    for family in &config.enums {
        let block = locate_enum(header, &family.name)?;
        tracing::debug!(
            enum_name = %family.name,
            start = block.start,
            end = block.end,
            "Located enum"
        );

        let members = extract_members(header, &block, family.member_prefix())?;
        if members.is_empty() {
            tracing::warn!(enum_name = %family.name, "Enum has no members matching {}_", family.member_prefix());
        }

        let declaration = Declaration::new(&family.name, &members);
        out.push_str(&declaration.to_string());
        declarations.push(DeclarationSummary {
            enum_name: declaration.enum_name.clone(),
            type_name: declaration.type_name.clone(),
            constant_count: declaration.constants.len(),
        });
    }

    let mut source = out.trim_end().to_string();
    source.push('\n');

    Ok((
        source,
        GenerationSummary {
            build_version,
            declarations,
        },
    ))
}

/// Read both headers named by `config`, generate, and write `output`.
///
/// `output` is only written once the whole source has been built, so a
/// failing run leaves any previous file in place.
pub fn generate_file<P: AsRef<Path>>(
    config: &GeneratorConfig,
    output: P,
) -> Result<GenerationSummary, GenerateError> {
    let output = output.as_ref();

    let header = read_header(&config.header)?;
    let version_header = read_header(&config.version_header)?;

    let (source, summary) = generate_source(&header, &version_header, config)?;

    fs_utils::write_file(output, source).map_err(|source| GenerateError::OutputUnwritable {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %output.display(), "Wrote generated source");

    Ok(summary)
}

fn read_header(path: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(path).map_err(|source| GenerateError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
