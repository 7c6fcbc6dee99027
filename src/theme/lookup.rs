//! Token Lookup
//!
//! Name-based access to the typography table for callers that only have
//! strings (CLI arguments, config files, templating).

use super::typography::{FontSizes, FontWeights, LineHeights, Typography};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Token section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Size,
    Weight,
    LineHeight,
}

impl Section {
    /// All sections in table order
    pub const ALL: [Section; 3] = [Section::Size, Section::Weight, Section::LineHeight];

    /// External section name
    pub fn name(self) -> &'static str {
        match self {
            Section::Size => "size",
            Section::Weight => "weight",
            Section::LineHeight => "lineHeight",
        }
    }

    /// CSS property the section's tokens apply to
    pub fn css_property(self) -> &'static str {
        match self {
            Section::Size => "font-size",
            Section::Weight => "font-weight",
            Section::LineHeight => "line-height",
        }
    }

    /// Token names of this section in definition order
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Section::Size => FontSizes::KEYS,
            Section::Weight => FontWeights::KEYS,
            Section::LineHeight => LineHeights::KEYS,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| Error::UnknownSection {
                name: s.to_string(),
            })
    }
}

/// A single token value, tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    /// Pixels
    Px(f32),
    /// Font weight
    Weight(u16),
    /// Unitless multiplier
    Multiplier(f64),
}

impl TokenValue {
    pub fn as_f64(self) -> f64 {
        match self {
            TokenValue::Px(v) => f64::from(v),
            TokenValue::Weight(v) => f64::from(v),
            TokenValue::Multiplier(v) => v,
        }
    }

    /// CSS unit suffix, if any
    pub fn unit(self) -> &'static str {
        match self {
            TokenValue::Px(_) => "px",
            TokenValue::Weight(_) | TokenValue::Multiplier(_) => "",
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Px(v) => write!(f, "{v}"),
            TokenValue::Weight(v) => write!(f, "{v}"),
            TokenValue::Multiplier(v) => write!(f, "{v}"),
        }
    }
}

impl Typography {
    /// Look up a token by section and name
    pub fn get(&self, section: Section, key: &str) -> Result<TokenValue> {
        let value = match section {
            Section::Size => self.size.get(key).map(TokenValue::Px),
            Section::Weight => self.weight.get(key).map(TokenValue::Weight),
            Section::LineHeight => self.line_height.get(key).map(TokenValue::Multiplier),
        };

        value.ok_or_else(|| Error::UnknownToken {
            section: section.name().to_string(),
            key: key.to_string(),
        })
    }

    /// Look up a token by `section.key` path, e.g. `size.2xl`
    pub fn lookup(&self, path: &str) -> Result<TokenValue> {
        let Some((section, key)) = path.split_once('.') else {
            return Err(Error::InvalidPath {
                path: path.to_string(),
            });
        };

        self.get(section.parse()?, key)
    }

    /// Every token in table order
    pub fn entries(&self) -> impl Iterator<Item = (Section, &'static str, TokenValue)> + '_ {
        Section::ALL.into_iter().flat_map(move |section| {
            section.keys().iter().filter_map(move |&key| {
                self.get(section, key).ok().map(|value| (section, key, value))
            })
        })
    }
}
