//! Configuration parsing and validation.
//!
//! Ecosystem Docs reads an optional TOML file (default:
//! `./config/ecodocs.toml`). Every section and key has a default, so an
//! empty file and a missing default file both yield [`Config::minimal`].
//!
//! ```toml
//! [search]
//! min_query_len = 3
//! max_results = 10
//!
//! [display]
//! width = 80
//! color = "auto"     # auto | always | never
//!
//! [export]
//! output_dir = "."
//! print_command = "lp"
//! ```

use anyhow::{Context, Result};
use ecosystem_docs_core::SearchParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location checked when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./config/ecodocs.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
        }
    }
}

fn default_min_query_len() -> usize {
    SearchParams::default().min_query_len
}
fn default_max_results() -> usize {
    SearchParams::default().max_results
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            color: ColorMode::default(),
        }
    }
}

fn default_width() -> usize {
    80
}

/// When to emit ANSI colors.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve `auto` against whether stdout is a terminal.
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Command run with the print file path as its last argument.
    #[serde(default)]
    pub print_command: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            print_command: None,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// All defaults.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Search parameters for the core engine.
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            min_query_len: self.search.min_query_len,
            max_results: self.search.max_results,
        }
    }

    /// Diagrams are dropped below this width.
    pub fn compact(&self) -> bool {
        self.display.width < 60
    }
}

/// Parse and validate a config from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    let defaults = SearchParams::default();
    if config.search.min_query_len < defaults.min_query_len {
        anyhow::bail!(
            "search.min_query_len must be >= {}",
            defaults.min_query_len
        );
    }
    if config.search.max_results == 0 || config.search.max_results > defaults.max_results {
        anyhow::bail!(
            "search.max_results must be between 1 and {}",
            defaults.max_results
        );
    }
    if config.display.width < 20 {
        anyhow::bail!("display.width must be >= 20");
    }
    if let Some(cmd) = &config.export.print_command {
        if cmd.trim().is_empty() {
            anyhow::bail!("export.print_command must not be empty when set");
        }
    }

    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}

/// Load `path` if given; otherwise the default path if it exists, else
/// [`Config::minimal`].
pub fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => load_config(p),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                load_config(default)
            } else {
                Ok(Config::minimal())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_minimal() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.search_params(), SearchParams::default());
        assert_eq!(cfg.display.width, 80);
        assert_eq!(cfg.display.color, ColorMode::Auto);
        assert_eq!(cfg.export.output_dir, PathBuf::from("."));
        assert!(cfg.export.print_command.is_none());
    }

    #[test]
    fn test_overrides() {
        let cfg = parse_config(
            r#"
[search]
max_results = 3

[display]
width = 40
color = "never"

[export]
output_dir = "out"
print_command = "lp -d office"
"#,
        )
        .unwrap();
        assert_eq!(cfg.search.min_query_len, 3);
        assert_eq!(cfg.search.max_results, 3);
        assert!(cfg.compact());
        assert!(!cfg.display.color.enabled());
        assert_eq!(cfg.export.print_command.as_deref(), Some("lp -d office"));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(parse_config("[search]\nmin_query_len = 0").is_err());
        assert!(parse_config("[search]\nmin_query_len = 2").is_err());
        assert!(parse_config("[search]\nmax_results = 0").is_err());
        assert!(parse_config("[search]\nmax_results = 11").is_err());
        assert!(parse_config("[search]\nmin_query_len = 4\nmax_results = 10").is_ok());
        assert!(parse_config("[display]\nwidth = 5").is_err());
        assert!(parse_config("[display]\ncolor = \"sometimes\"").is_err());
        assert!(parse_config("[export]\nprint_command = \"  \"").is_err());
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
