//! Configuration structures
//!
//! This module defines the TOML schema shared by the library and the CLI.
//! Every section and every field is optional; missing values fall back to the
//! toolkit's conventional layout (`dist/Farasa*.jar`, run through `java`).

use crate::error::{FarasaError, Result};
use crate::invoker::Tool;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default Java launcher
pub const DEFAULT_JAVA: &str = "java";
/// Directory the Farasa distribution keeps its jars in
pub const DEFAULT_JAR_DIR: &str = "dist";
/// Jar file of the segmenter
pub const DEFAULT_SEGMENTER_JAR: &str = "FarasaSegmenterJar.jar";
/// Jar file of the POS tagger
pub const DEFAULT_POS_TAGGER_JAR: &str = "FarasaPOSJar.jar";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FarasaConfig {
    /// Location of the Java runtime and the Farasa jars
    pub toolkit: ToolkitConfig,
    /// Defaults for segmentation
    pub segment: SegmentOptions,
    /// Defaults for POS tagging
    pub pos_tag: PosTagOptions,
    /// Directory processing behaviour
    pub batch: BatchConfig,
}

impl FarasaConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FarasaConfig =
            toml::from_str(content).map_err(|e| FarasaError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(FarasaError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| FarasaError::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            FarasaError::Config(msg) => {
                FarasaError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<()> {
        self.toolkit.validate()
    }
}

/// Where to find the Java runtime and the jars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// Java launcher, looked up on PATH unless it is a path
    pub java: String,
    /// Options passed to the JVM before `-jar`
    pub java_options: Vec<String>,
    /// Directory holding the jars
    pub jar_dir: PathBuf,
    /// Segmenter jar, relative to `jar_dir` unless absolute
    pub segmenter_jar: PathBuf,
    /// POS tagger jar, relative to `jar_dir` unless absolute
    pub pos_tagger_jar: PathBuf,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            java: DEFAULT_JAVA.to_string(),
            java_options: vec!["-Dfile.encoding=UTF-8".to_string()],
            jar_dir: PathBuf::from(DEFAULT_JAR_DIR),
            segmenter_jar: PathBuf::from(DEFAULT_SEGMENTER_JAR),
            pos_tagger_jar: PathBuf::from(DEFAULT_POS_TAGGER_JAR),
        }
    }
}

impl ToolkitConfig {
    /// Full path of the jar implementing `tool`
    pub fn jar_path(&self, tool: Tool) -> PathBuf {
        let jar = match tool {
            Tool::Segmenter => &self.segmenter_jar,
            Tool::PosTagger => &self.pos_tagger_jar,
        };
        // `join` keeps absolute jar paths as they are
        self.jar_dir.join(jar)
    }

    fn validate(&self) -> Result<()> {
        if self.java.trim().is_empty() {
            return Err(FarasaError::Config(
                "toolkit.java must not be empty".to_string(),
            ));
        }
        if self.segmenter_jar.as_os_str().is_empty() || self.pos_tagger_jar.as_os_str().is_empty()
        {
            return Err(FarasaError::Config(
                "jar file names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Post-processing applied to segmenter output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentOptions {
    /// Reconnect a split-off ta marbuta to its stem
    pub restore_ta_marbuta: bool,
    /// Drop everything outside the Arabic script
    pub ditch_non_arabic: bool,
    /// Replacement for the `+` affix marker
    pub split_char: Option<String>,
}

impl SegmentOptions {
    /// Options with only ta-marbuta restoration switched on or off
    pub fn restore_ta_marbuta(restore: bool) -> Self {
        Self {
            restore_ta_marbuta: restore,
            ..Default::default()
        }
    }

    /// Set the affix delimiter
    pub fn with_split_char(mut self, split_char: impl Into<String>) -> Self {
        self.split_char = Some(split_char.into());
        self
    }
}

/// Handling of non-Arabic text around the POS tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PosTagOptions {
    /// Tag only the Arabic sections and splice the rest back in afterwards
    pub only_arabic: bool,
    /// Remove non-Arabic sections before tagging
    pub ditch_non_arabic: bool,
}

impl Default for PosTagOptions {
    fn default() -> Self {
        Self {
            only_arabic: true,
            ditch_non_arabic: false,
        }
    }
}

impl PosTagOptions {
    /// Default options with ditching switched on or off
    pub fn ditch_non_arabic(ditch: bool) -> Self {
        Self {
            ditch_non_arabic: ditch,
            ..Default::default()
        }
    }
}

/// What to do when one file of a directory fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Log the failure and carry on with the next file
    #[default]
    BestEffort,
    /// Stop at the first failure
    FailFast,
}

/// Batch section of the configuration file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Abort on the first failing file
    pub fail_fast: bool,
}

impl BatchConfig {
    /// Policy corresponding to this section
    pub fn policy(&self) -> BatchPolicy {
        if self.fail_fast {
            BatchPolicy::FailFast
        } else {
            BatchPolicy::BestEffort
        }
    }
}
