//! Theme - Design Tokens

pub mod lookup;
pub mod typography;

pub use lookup::{Section, TokenValue};
pub use typography::{FontSizes, FontWeights, LineHeights, TYPOGRAPHY, Typography, typography};
