use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Report section ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include the `U+XXXX` code point column in the plain-text report
    #[serde(default = "default_true")]
    pub show_codepoints: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { show_codepoints: true }
    }
}

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Clear the screen before printing the glyph sheet
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    #[serde(default)]
    pub report: ReportConfig,
}

fn default_true() -> bool {
    true
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            clear_screen: true,
            report: ReportConfig::default(),
        }
    }
}

impl ConfigFile {
    /// Load from the default location, or return defaults if there is no file yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))
    }

    /// Write a starter config file to the default location (only if it doesn't exist).
    /// The flag is false when an existing file was left alone.
    pub fn write_default_if_missing() -> Result<(PathBuf, bool)> {
        let path = config_path();
        let written = Self::write_default_at(&path)?;
        Ok((path, written))
    }

    pub fn write_default_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Failed to write config file at {}", path.display()))?;
        Ok(true)
    }
}

// ── Paths ─────────────────────────────────────────────────────────────────────

pub fn config_path() -> PathBuf {
    dirs_config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glyphcheck")
        .join("config.toml")
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

// ── Default config template ───────────────────────────────────────────────────

const DEFAULT_CONFIG_TOML: &str = r#"# glyphcheck configuration
# Run `glyphcheck --init` to regenerate this file.

# Clear the screen before printing the glyph sheet.
# `--no-clear` on the command line overrides this.
clear_screen = true

[report]
# Show U+XXXX code points next to each glyph in `--report` output
show_codepoints = true
"#;
