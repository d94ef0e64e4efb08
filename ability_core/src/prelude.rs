//! Prelude module for convenient imports
//!
//! ```rust
//! use ability_core::prelude::*;
//! ```

pub use crate::config::{ConfigError, RenderConfig};
pub use crate::error::AbilityScoreError;
pub use crate::format::{FormatSpec, NumberFormat};
pub use crate::score::AbilityScore;
