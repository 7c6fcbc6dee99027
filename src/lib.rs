//! Typography Tokens Library
//!
//! A fixed catalog of typography design tokens (font sizes, weights and line
//! heights) for the design system, with name-based lookup and exporters for
//! JSON, TOML, CSS custom properties and JSON Schema.
//!
//! ```
//! use typography_tokens::theme::typography;
//!
//! assert_eq!(typography().size.base, 16.0);
//! assert_eq!(typography().weight.bold, 700);
//! assert_eq!(typography().lookup("size.2xl").map(|v| v.as_f64()).ok(), Some(24.0));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod helpers;
pub mod theme;

pub use error::{Error, Result};
pub use theme::{Section, TYPOGRAPHY, TokenValue, Typography, typography};
