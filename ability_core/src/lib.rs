//! ability_core - Ability scores for tabletop rule systems
//!
//! This library provides:
//! - AbilityScore: a value clamped to 1..=30 with its derived modifier
//! - FormatSpec / NumberFormat: the `G`, `M`, `L`, `R` and `C` text layouts
//! - RenderConfig: default rendering settings loaded from TOML
//!
//! ```rust
//! use ability_core::AbilityScore;
//!
//! let strength = AbilityScore::new(15);
//! assert_eq!(strength.modifier(), 2);
//! assert_eq!(strength.to_string_with("M").unwrap(), "15 (+2)");
//! assert_eq!(AbilityScore::new(42).value(), 30);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod prelude;
pub mod score;

// Re-export core types for convenience
pub use config::{ConfigError, RenderConfig};
pub use error::AbilityScoreError;
pub use format::{FormatSpec, NumberFormat};
pub use score::AbilityScore;
