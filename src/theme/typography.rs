//! Typography - Font Sizes, Weights and Line Heights
//!
//! The token table is a single process-wide static. Fields are read directly
//! (`TYPOGRAPHY.size.base`); dynamic access by name lives in [`super::lookup`].

use schemars::JsonSchema;
use serde::Serialize;

/// The typography token table
pub static TYPOGRAPHY: Typography = Typography {
    size: FontSizes {
        xs: 12.0,
        sm: 14.0,
        base: 16.0,
        lg: 18.0,
        xl: 20.0,
        xl2: 24.0,
        xl3: 30.0,
    },
    weight: FontWeights {
        regular: 400,
        medium: 500,
        semibold: 600,
        bold: 700,
    },
    line_height: LineHeights {
        sm: 1.2,
        base: 1.5,
        lg: 1.75,
    },
};

/// Access the typography token table
pub fn typography() -> &'static Typography {
    &TYPOGRAPHY
}

/// Typography tokens grouped by section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font sizes in pixels
    pub size: FontSizes,
    /// Font weights on the 100-900 scale
    pub weight: FontWeights,
    /// Unitless line height multipliers
    pub line_height: LineHeights,
}

/// Font sizes in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct FontSizes {
    pub xs: f32,
    pub sm: f32,
    pub base: f32,
    pub lg: f32,
    pub xl: f32,
    #[serde(rename = "2xl")]
    pub xl2: f32,
    #[serde(rename = "3xl")]
    pub xl3: f32,
}

impl FontSizes {
    /// Token names in definition order
    pub const KEYS: &'static [&'static str] = &["xs", "sm", "base", "lg", "xl", "2xl", "3xl"];

    /// Look up a size by token name
    pub fn get(&self, key: &str) -> Option<f32> {
        match key {
            "xs" => Some(self.xs),
            "sm" => Some(self.sm),
            "base" => Some(self.base),
            "lg" => Some(self.lg),
            "xl" => Some(self.xl),
            "2xl" => Some(self.xl2),
            "3xl" => Some(self.xl3),
            _ => None,
        }
    }
}

/// Font weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct FontWeights {
    pub regular: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

impl FontWeights {
    pub const KEYS: &'static [&'static str] = &["regular", "medium", "semibold", "bold"];

    pub fn get(&self, key: &str) -> Option<u16> {
        match key {
            "regular" => Some(self.regular),
            "medium" => Some(self.medium),
            "semibold" => Some(self.semibold),
            "bold" => Some(self.bold),
            _ => None,
        }
    }
}

/// Line heights as multipliers of the font size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct LineHeights {
    pub sm: f64,
    pub base: f64,
    pub lg: f64,
}

impl LineHeights {
    pub const KEYS: &'static [&'static str] = &["sm", "base", "lg"];

    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "sm" => Some(self.sm),
            "base" => Some(self.base),
            "lg" => Some(self.lg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_values() {
        let size = &typography().size;
        assert_eq!(size.xs, 12.0);
        assert_eq!(size.sm, 14.0);
        assert_eq!(size.base, 16.0);
        assert_eq!(size.lg, 18.0);
        assert_eq!(size.xl, 20.0);
        assert_eq!(size.xl2, 24.0);
        assert_eq!(size.xl3, 30.0);
    }

    #[test]
    fn test_weight_values() {
        let weight = &typography().weight;
        assert_eq!(weight.regular, 400);
        assert_eq!(weight.medium, 500);
        assert_eq!(weight.semibold, 600);
        assert_eq!(weight.bold, 700);
    }

    #[test]
    fn test_line_height_values() {
        let line_height = &typography().line_height;
        assert_eq!(line_height.sm, 1.2);
        assert_eq!(line_height.base, 1.5);
        assert_eq!(line_height.lg, 1.75);
    }

    #[test]
    fn test_keys_resolve_to_fields() {
        let t = typography();
        for key in FontSizes::KEYS {
            assert!(t.size.get(key).is_some(), "size.{key}");
        }
        for key in FontWeights::KEYS {
            assert!(t.weight.get(key).is_some(), "weight.{key}");
        }
        for key in LineHeights::KEYS {
            assert!(t.line_height.get(key).is_some(), "lineHeight.{key}");
        }
        assert_eq!(t.size.get("2xl"), Some(24.0));
        assert_eq!(t.size.get("xl2"), None);
        assert_eq!(t.size.get("4xl"), None);
    }

    #[test]
    fn test_accessor_is_stable() {
        let first = typography();
        let second = typography();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, &TYPOGRAPHY));
        assert_eq!(first.size.lg, 18.0);
        assert_eq!(second.size.lg, 18.0);
    }

    #[test]
    fn test_copies_do_not_affect_table() {
        let mut copy = *typography();
        copy.size.base = 99.0;
        assert_eq!(typography().size.base, 16.0);
        assert_ne!(copy, TYPOGRAPHY);
    }
}
