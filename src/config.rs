//! Export Configuration
//!
//! TOML configuration for `typography-tokens export`, loaded from an explicit
//! path or from the platform config directory.

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_CSS_SELECTOR};
use crate::error::Result;
use crate::export::{ExportOptions, Format, render};
use crate::helpers::{get_config_dir, write_file};
use crate::theme::typography;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Export configuration file contents
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output format
    pub format: Format,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    /// Multi-line, indented output
    pub pretty: bool,
    /// Prefix for CSS custom property names
    pub css_prefix: Option<String>,
    /// Selector wrapping the CSS custom properties
    pub css_selector: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            output: None,
            pretty: true,
            css_prefix: None,
            css_selector: DEFAULT_CSS_SELECTOR.to_string(),
        }
    }
}

impl ExportConfig {
    /// Load configuration from a file
    ///
    /// An empty file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading export config");
        let value = std::fs::read_to_string(path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            debug!(error = %e, path = ?path, "Failed to parse export config");
            e
        })?;

        Ok(config)
    }

    /// Load configuration from the platform config directory, falling back to defaults
    pub fn try_load_default() -> Result<Self> {
        let path = default_config_path()?;
        if !path.exists() {
            info!(path = ?path, "No export config found, using defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Apply command-line overrides on top of the loaded file
    pub fn apply_overrides(
        &mut self,
        format: Option<Format>,
        output: Option<PathBuf>,
        css_prefix: Option<String>,
        compact: bool,
    ) {
        if let Some(format) = format {
            self.format = format;
        }
        if output.is_some() {
            self.output = output;
        }
        if css_prefix.is_some() {
            self.css_prefix = css_prefix;
        }
        if compact {
            self.pretty = false;
        }
    }

    /// Rendering options derived from this configuration
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            pretty: self.pretty,
            css_prefix: self.css_prefix.clone().filter(|prefix| !prefix.is_empty()),
            css_selector: self.css_selector.clone(),
        }
    }
}

/// Path of the export config file in the platform config directory
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Render the typography table per `config`, writing to `config.output` when set
///
/// Returns the rendered text.
pub fn run_export(config: &ExportConfig) -> Result<String> {
    let rendered = render(typography(), config.format, &config.options())?;

    if let Some(output) = &config.output {
        write_file(output, &rendered)?;
        info!(path = ?output, format = %config.format, "Exported typography tokens");
    }

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
format = "css"
output = "dist/tokens.css"
pretty = false
css_prefix = "ds"
css_selector = ".app"
"#,
        )
        .expect("write config");

        let config = ExportConfig::load(&path).expect("load");
        assert_eq!(config.format, Format::Css);
        assert_eq!(config.output, Some(PathBuf::from("dist/tokens.css")));
        assert!(!config.pretty);
        assert_eq!(config.css_prefix.as_deref(), Some("ds"));
        assert_eq!(config.css_selector, ".app");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "format = \"toml\"\n").expect("write config");

        let config = ExportConfig::load(&path).expect("load");
        assert_eq!(config.format, Format::Toml);
        assert!(config.pretty);
        assert_eq!(config.output, None);
        assert_eq!(config.css_selector, ":root");
    }

    #[test]
    fn test_load_empty_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "  \n").expect("write config");

        assert_eq!(ExportConfig::load(&path).expect("load"), ExportConfig::default());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().expect("tempdir");

        let missing = dir.path().join("missing.toml");
        assert!(matches!(ExportConfig::load(&missing), Err(Error::Io { .. })));

        let malformed = dir.path().join("bad.toml");
        std::fs::write(&malformed, "format = \"yaml\"\n").expect("write config");
        assert!(matches!(ExportConfig::load(&malformed), Err(Error::TomlDe { .. })));
    }

    #[test]
    fn test_empty_prefix_is_dropped() {
        let config = ExportConfig {
            css_prefix: Some(String::new()),
            ..ExportConfig::default()
        };
        assert_eq!(config.options().css_prefix, None);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = ExportConfig {
            format: Format::Json,
            output: Some(PathBuf::from("tokens.json")),
            css_prefix: Some("app".to_string()),
            ..ExportConfig::default()
        };

        config.apply_overrides(
            Some(Format::Css),
            Some(PathBuf::from("tokens.css")),
            Some("ds".to_string()),
            true,
        );

        assert_eq!(config.format, Format::Css);
        assert_eq!(config.output, Some(PathBuf::from("tokens.css")));
        assert_eq!(config.css_prefix.as_deref(), Some("ds"));
        assert!(!config.pretty);
        assert_eq!(config.css_selector, ":root");
    }

    #[test]
    fn test_absent_overrides_keep_file_values() {
        let original = ExportConfig {
            format: Format::Toml,
            output: Some(PathBuf::from("tokens.toml")),
            css_prefix: Some("app".to_string()),
            ..ExportConfig::default()
        };
        let mut config = original.clone();

        config.apply_overrides(None, None, None, false);
        assert_eq!(config, original);
    }

    #[test]
    fn test_run_export_writes_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("out").join("tokens.css");
        let config = ExportConfig {
            format: Format::Css,
            output: Some(output.clone()),
            css_prefix: Some("ds".to_string()),
            ..ExportConfig::default()
        };

        let rendered = run_export(&config).expect("export");
        let written = std::fs::read_to_string(&output).expect("read output");
        assert_eq!(rendered, written);
        assert!(written.contains("--ds-font-weight-bold: 700;"));
    }

    #[test]
    fn test_run_export_without_output() {
        let rendered = run_export(&ExportConfig::default()).expect("export");
        assert!(rendered.contains("\"lineHeight\""));
    }
}
