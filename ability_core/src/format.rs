//! Format specifiers and numeric formatting parameters for ability scores
//!
//! An ability score renders in one of five layouts:
//!
//! | Spec | Layout             | 1 / -5      | 10 / 0      | 30 / +10   |
//! |------|--------------------|-------------|-------------|------------|
//! | `G`  | value              | `1`         | `10`        | `30`       |
//! | `M`  | value and modifier | `1 (-5)`    | `10 (0)`    | `30 (+10)` |
//! | `L`  | left aligned       | `1  (-5)`   | `10 (0)`    | `30 (+10)` |
//! | `R`  | right aligned      | ` 1  (-5)`  | `10   (0)`  | `30 (+10)` |
//! | `C`  | centered           | ` 1 (-5)`   | `10 (0)`    | `30 (+10)` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AbilityScoreError;

/// Layout used when rendering an ability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormatSpec {
    /// `G`: the value alone
    #[default]
    General,
    /// `M`: value followed by the signed modifier in parentheses
    Modifier,
    /// `L`: like `M`, padded after single-digit values
    Left,
    /// `R`: like `M`, padded so columns of scores line up on the right
    Right,
    /// `C`: like `M`, padded before single-digit values
    Center,
}

impl FormatSpec {
    /// Get all format specifiers
    pub fn all() -> &'static [FormatSpec] {
        &[
            FormatSpec::General,
            FormatSpec::Modifier,
            FormatSpec::Left,
            FormatSpec::Right,
            FormatSpec::Center,
        ]
    }

    /// Canonical upper-case letter for this specifier
    pub fn letter(self) -> char {
        match self {
            FormatSpec::General => 'G',
            FormatSpec::Modifier => 'M',
            FormatSpec::Left => 'L',
            FormatSpec::Right => 'R',
            FormatSpec::Center => 'C',
        }
    }

    /// Parse an optional specifier; absent or empty means `G`
    pub fn parse_opt(format: Option<&str>) -> Result<Self, AbilityScoreError> {
        match format {
            None => Ok(FormatSpec::General),
            Some(s) => s.parse(),
        }
    }

    /// Lay out a value and modifier with the given number format
    pub(crate) fn layout(self, value: u8, modifier: i8, numbers: &NumberFormat) -> String {
        let v = numbers.format_unsigned(value);
        if self == FormatSpec::General {
            return v;
        }

        let m = numbers.format_modifier(modifier);
        let single_digit = value < 10;
        match self {
            FormatSpec::General => v,
            FormatSpec::Modifier => format!("{v} ({m})"),
            FormatSpec::Left => format!("{v} {}({m})", pad(single_digit)),
            FormatSpec::Right => format!(
                "{}{v} {}{}({m})",
                pad(single_digit),
                pad(modifier < 10),
                pad(modifier == 0)
            ),
            FormatSpec::Center => format!("{}{v} ({m})", pad(single_digit)),
        }
    }
}

fn pad(when: bool) -> &'static str {
    if when {
        " "
    } else {
        ""
    }
}

impl FromStr for FormatSpec {
    type Err = AbilityScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "" | "G" => Ok(FormatSpec::General),
            "M" => Ok(FormatSpec::Modifier),
            "L" => Ok(FormatSpec::Left),
            "R" => Ok(FormatSpec::Right),
            "C" => Ok(FormatSpec::Center),
            _ => Err(AbilityScoreError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for FormatSpec {
    type Error = AbilityScoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FormatSpec> for String {
    fn from(spec: FormatSpec) -> Self {
        spec.letter().to_string()
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Numeric formatting parameters
///
/// Covers the sign characters used for modifiers and, optionally, a set of
/// ten native digits that replace `0`-`9`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Prefix for positive modifiers
    #[serde(default = "default_positive_sign")]
    pub positive_sign: String,
    /// Prefix for negative modifiers
    #[serde(default = "default_negative_sign")]
    pub negative_sign: String,
    /// Native digits for 0 through 9 (None = ASCII)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits: Option<String>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            positive_sign: default_positive_sign(),
            negative_sign: default_negative_sign(),
            digits: None,
        }
    }
}

fn default_positive_sign() -> String {
    "+".to_string()
}
fn default_negative_sign() -> String {
    "-".to_string()
}

impl NumberFormat {
    /// Culture-independent formatting: ASCII digits, `+` and `-`
    pub fn invariant() -> Self {
        NumberFormat::default()
    }

    /// Check that a configured digit set has exactly ten digits
    pub fn validate(&self) -> Result<(), AbilityScoreError> {
        match &self.digits {
            Some(digits) => {
                let count = digits.chars().count();
                if count == 10 {
                    Ok(())
                } else {
                    Err(AbilityScoreError::InvalidDigits(count))
                }
            }
            None => Ok(()),
        }
    }

    /// Render an unsigned number using the configured digits
    pub fn format_unsigned(&self, n: u8) -> String {
        let ascii = n.to_string();
        match &self.digits {
            None => ascii,
            Some(digits) => ascii
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|d| digits.chars().nth(d as usize))
                        .unwrap_or(c)
                })
                .collect(),
        }
    }

    /// Render a modifier: `+N`, `-N`, or a bare `0`
    pub fn format_modifier(&self, modifier: i8) -> String {
        let magnitude = self.format_unsigned(modifier.unsigned_abs());
        match modifier.signum() {
            1 => format!("{}{magnitude}", self.positive_sign),
            -1 => format!("{}{magnitude}", self.negative_sign),
            _ => magnitude,
        }
    }
}
