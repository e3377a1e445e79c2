//! Generator configuration.
//!
//! Defaults reproduce the stock libheif binding: the system headers under
//! `/usr/include/<multiarch>/libheif/` and the nine exported enums. A YAML
//! file can override any of it:
//!
//! ```yaml
//! header: /opt/libheif/include/libheif/heif.h
//! version_header: /opt/libheif/include/libheif/heif_version.h
//! enums:
//!   - name: heif_error_code
//!   - name: heif_channel
//!     member_prefix: heif_channel
//! ```

pub mod families;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::header::NUMERIC_VERSION_MACRO;
pub use families::{default_families, remapped_prefix, EnumFamily, DEFAULT_ENUMS, MEMBER_PREFIX_REMAP};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Path to `heif.h`
    #[serde(default = "default_header")]
    pub header: PathBuf,

    /// Path to `heif_version.h`
    #[serde(default = "default_version_header")]
    pub version_header: PathBuf,

    /// Macro holding the numeric version expression
    #[serde(default = "default_version_macro")]
    pub version_macro: String,

    /// Enums to generate, in output order
    #[serde(default = "default_families")]
    pub enums: Vec<EnumFamily>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            version_header: default_version_header(),
            version_macro: default_version_macro(),
            enums: default_families(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file; absent keys take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenerateError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|e| {
            GenerateError::InvalidConfig(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, GenerateError> {
        let config: GeneratorConfig = serde_yaml::from_str(contents)
            .map_err(|e| GenerateError::InvalidConfig(format!("Failed to parse YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.version_macro.trim().is_empty() {
            return Err(GenerateError::InvalidConfig("version_macro must not be empty".to_string()));
        }

        if self.enums.is_empty() {
            return Err(GenerateError::InvalidConfig("at least one enum is required".to_string()));
        }

        let mut seen = HashSet::new();
        for family in &self.enums {
            if !is_c_identifier(&family.name) {
                return Err(GenerateError::InvalidConfig(format!(
                    "'{}' is not a C identifier",
                    family.name
                )));
            }
            if !is_c_identifier(family.member_prefix()) {
                return Err(GenerateError::InvalidConfig(format!(
                    "member prefix '{}' of {} is not a C identifier",
                    family.member_prefix(),
                    family.name
                )));
            }
            if !seen.insert(family.name.as_str()) {
                return Err(GenerateError::InvalidConfig(format!(
                    "enum {} is listed more than once",
                    family.name
                )));
            }
        }

        Ok(())
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// Debian multiarch tuple of the build target, e.g. `x86_64-linux-gnu`.
///
/// Targets without a known tuple fall back to the OS name.
pub fn multiarch_tag() -> String {
    let arch = std::env::consts::ARCH;
    let os = std::env::consts::OS;
    if os != "linux" {
        return os.to_string();
    }
    match arch {
        "x86" => "i386-linux-gnu".to_string(),
        "arm" => "arm-linux-gnueabihf".to_string(),
        "powerpc64" if cfg!(target_endian = "little") => "powerpc64le-linux-gnu".to_string(),
        "x86_64" | "aarch64" | "riscv64" | "s390x" | "powerpc64" | "mips64" => {
            format!("{}-linux-gnu", arch)
        }
        _ => os.to_string(),
    }
}

fn include_dir() -> PathBuf {
    PathBuf::from("/usr/include").join(multiarch_tag()).join("libheif")
}

fn default_header() -> PathBuf {
    include_dir().join("heif.h")
}

fn default_version_header() -> PathBuf {
    include_dir().join("heif_version.h")
}

fn default_version_macro() -> String {
    NUMERIC_VERSION_MACRO.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert!(config.header.ends_with("libheif/heif.h"));
        assert!(config.version_header.ends_with("libheif/heif_version.h"));
        assert!(config.header.starts_with("/usr/include"));
        assert_eq!(config.version_macro, "LIBHEIF_NUMERIC_VERSION");
        assert_eq!(config.enums.len(), DEFAULT_ENUMS.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = GeneratorConfig::from_yaml("header: /tmp/heif.h\n").unwrap();
        assert_eq!(config.header, PathBuf::from("/tmp/heif.h"));
        assert_eq!(config.version_header, default_version_header());
        assert_eq!(config.enums, default_families());
    }

    #[test]
    fn test_yaml_enum_list() {
        let yaml = "\
enums:
  - name: heif_channel
  - name: heif_error_code
    member_prefix: heif_error
";
        let config = GeneratorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.enums.len(), 2);
        assert_eq!(config.enums[0].member_prefix(), "heif_channel");
        assert_eq!(config.enums[1].member_prefix(), "heif_error");
    }

    #[test]
    fn test_validation_failures() {
        assert!(GeneratorConfig::from_yaml("enums: []\n").is_err());
        assert!(GeneratorConfig::from_yaml("enums:\n  - name: \"heif channel\"\n").is_err());
        assert!(GeneratorConfig::from_yaml("enums:\n  - name: heif_channel\n  - name: heif_channel\n").is_err());
        assert!(GeneratorConfig::from_yaml("version_macro: \"\"\n").is_err());
        assert!(GeneratorConfig::from_yaml("enums: 3\n").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = GeneratorConfig::load_from_file("/nonexistent/heifdefs.yaml").unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfig(_)));
    }

    #[test]
    fn test_is_c_identifier() {
        assert!(is_c_identifier("heif_chroma"));
        assert!(is_c_identifier("_private1"));
        assert!(!is_c_identifier("1heif"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("heif-chroma"));
    }
}
