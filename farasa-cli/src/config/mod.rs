//! Configuration module
//!
//! Settings are layered: built-in defaults, then the TOML file, then
//! environment variables and command-line flags.

use anyhow::{Context, Result};
use farasa_core::FarasaConfig;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "farasa.toml";

/// Load the configuration file, falling back to defaults
///
/// An explicitly named file must exist; the implicit `farasa.toml` is only
/// read when present.
pub fn load_config(path: Option<&Path>) -> Result<FarasaConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !implicit.is_file() {
                log::debug!("No configuration file, using defaults");
                return Ok(FarasaConfig::default());
            }
            implicit
        }
    };

    log::info!("Loading configuration from {}", path.display());
    FarasaConfig::from_file(&path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))
}

/// Command-line values that take precedence over the configuration file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// Java launcher
    pub java: Option<String>,
    /// Directory holding the jars
    pub jar_dir: Option<PathBuf>,
    /// Switch ta-marbuta restoration on
    pub restore_ta_marbuta: bool,
    /// Switch non-Arabic removal on
    pub ditch_non_arabic: bool,
    /// Affix delimiter
    pub split_char: Option<String>,
    /// Abort a directory run on the first failure
    pub fail_fast: bool,
}

impl Overrides {
    /// Apply the overrides on top of `config`
    pub fn apply(&self, config: &mut FarasaConfig) {
        if let Some(java) = &self.java {
            config.toolkit.java = java.clone();
        }
        if let Some(jar_dir) = &self.jar_dir {
            config.toolkit.jar_dir = jar_dir.clone();
        }
        if self.split_char.is_some() {
            config.segment.split_char = self.split_char.clone();
        }
        config.segment.restore_ta_marbuta |= self.restore_ta_marbuta;
        config.segment.ditch_non_arabic |= self.ditch_non_arabic;
        config.pos_tag.ditch_non_arabic |= self.ditch_non_arabic;
        config.batch.fail_fast |= self.fail_fast;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farasa_core::BatchPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_explicit_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[toolkit]\njar_dir = \"/opt/farasa\"\n\n[segment]\nsplit_char = \"_\"\n"
        )
        .unwrap();

        let config = load_config(Some(temp_file.path())).unwrap();
        assert_eq!(config.toolkit.jar_dir, PathBuf::from("/opt/farasa"));
        assert_eq!(config.segment.split_char.as_deref(), Some("_"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = load_config(Some(Path::new("/nonexistent/farasa.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }

    #[test]
    fn test_flags_override_file() {
        let mut config = FarasaConfig::from_toml_str(
            "[toolkit]\njava = \"java8\"\n[segment]\nsplit_char = \"_\"\n",
        )
        .unwrap();
        let overrides = Overrides {
            java: Some("/usr/bin/java".to_string()),
            jar_dir: Some(PathBuf::from("lib")),
            split_char: Some("|".to_string()),
            ditch_non_arabic: true,
            fail_fast: true,
            ..Default::default()
        };
        overrides.apply(&mut config);

        assert_eq!(config.toolkit.java, "/usr/bin/java");
        assert_eq!(config.toolkit.jar_dir, PathBuf::from("lib"));
        assert_eq!(config.segment.split_char.as_deref(), Some("|"));
        assert!(config.segment.ditch_non_arabic);
        assert!(config.pos_tag.ditch_non_arabic);
        assert!(!config.segment.restore_ta_marbuta);
        assert_eq!(config.batch.policy(), BatchPolicy::FailFast);
    }

    #[test]
    fn test_unset_flags_keep_file_values() {
        let mut config =
            FarasaConfig::from_toml_str("[segment]\nrestore_ta_marbuta = true\nsplit_char = \"_\"\n")
                .unwrap();
        Overrides::default().apply(&mut config);

        assert!(config.segment.restore_ta_marbuta);
        assert_eq!(config.segment.split_char.as_deref(), Some("_"));
        assert_eq!(config.toolkit.java, "java");
    }
}
