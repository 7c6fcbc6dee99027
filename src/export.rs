//! Token Export
//!
//! Renders the typography table for consumers outside Rust: JSON and TOML
//! with the external key names, CSS custom properties, and a JSON Schema.

use crate::constants::DEFAULT_CSS_SELECTOR;
use crate::error::{Error, Result};
use crate::theme::Typography;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Toml,
    Css,
    /// JSON Schema describing the table shape
    Schema,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Json, Format::Toml, Format::Css, Format::Schema];

    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Css => "css",
            Format::Schema => "schema",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Invalid {
                message: format!("unknown format '{s}', expected one of json, toml, css, schema"),
            })
    }
}

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Multi-line, indented output for JSON, CSS and Schema; TOML is always multi-line
    pub pretty: bool,
    /// Prefix for CSS custom property names (`--<prefix>-font-size-xs`)
    pub css_prefix: Option<String>,
    /// Selector wrapping the CSS custom properties
    pub css_selector: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            css_prefix: None,
            css_selector: DEFAULT_CSS_SELECTOR.to_string(),
        }
    }
}

/// Render the table in the given format
pub fn render(typography: &Typography, format: Format, options: &ExportOptions) -> Result<String> {
    debug!(format = %format, pretty = options.pretty, "Rendering typography tokens");

    let output = match format {
        Format::Json if options.pretty => serde_json::to_string_pretty(typography)?,
        Format::Json => serde_json::to_string(typography)?,
        Format::Toml => toml::to_string_pretty(typography)?,
        Format::Css => render_css(typography, options),
        Format::Schema => {
            let schema = schemars::schema_for!(Typography);
            if options.pretty {
                serde_json::to_string_pretty(&schema)?
            } else {
                serde_json::to_string(&schema)?
            }
        }
    };

    Ok(output)
}

/// CSS custom property name for a token
pub fn css_variable_name(prefix: Option<&str>, property: &str, key: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("--{prefix}-{property}-{key}"),
        _ => format!("--{property}-{key}"),
    }
}

fn render_css(typography: &Typography, options: &ExportOptions) -> String {
    let prefix = options.css_prefix.as_deref();
    let (open, indent, close) = if options.pretty {
        (" {\n", "  ", "}\n")
    } else {
        ("{", "", "}")
    };

    let mut css = String::new();
    css.push_str(&options.css_selector);
    css.push_str(open);

    for (section, key, value) in typography.entries() {
        let name = css_variable_name(prefix, section.css_property(), key);
        css.push_str(&format!("{indent}{name}: {value}{};", value.unit()));
        if options.pretty {
            css.push('\n');
        }
    }

    css.push_str(close);
    css
}
