//! AbilityScore - A character attribute clamped to 1..=30 with its derived modifier

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AbilityScoreError;
use crate::format::{FormatSpec, NumberFormat};

/// A character ability score and its modifier
///
/// The value is always within [`MIN_VALUE`](Self::MIN_VALUE) through
/// [`MAX_VALUE`](Self::MAX_VALUE); out-of-range input is clamped, never rejected.
/// The modifier is `floor((value - 10) / 2)`:
///
/// | Value | 1  | 2-3 | 8-9 | 10-11 | 12-13 | 30  |
/// |-------|----|-----|-----|-------|-------|-----|
/// | Mod   | -5 | -4  | -1  | 0     | +1    | +10 |
///
/// Equality, ordering and hashing only look at the value.
#[derive(Debug, Clone, Copy)]
pub struct AbilityScore {
    value: u8,
    modifier: i8,
}

impl AbilityScore {
    /// Smallest possible value
    pub const MIN_VALUE: u8 = 1;
    /// Largest possible value
    pub const MAX_VALUE: u8 = 30;
    /// Average value; the modifier is zero here
    pub const AVERAGE_VALUE: u8 = 10;

    pub const MIN: AbilityScore = AbilityScore::from_clamped(Self::MIN_VALUE);
    pub const MAX: AbilityScore = AbilityScore::from_clamped(Self::MAX_VALUE);
    pub const AVERAGE: AbilityScore = AbilityScore::from_clamped(Self::AVERAGE_VALUE);

    /// Create an ability score, clamping `value` into range
    pub fn new(value: u8) -> Self {
        let clamped = clamp_value(value);
        if clamped != value {
            tracing::debug!(raw = value, clamped, "ability score clamped into range");
        }
        AbilityScore::from_clamped(clamped)
    }

    /// Create an ability score from any integer, clamping into range
    pub fn saturating(raw: i64) -> Self {
        let clamped = raw.clamp(Self::MIN_VALUE as i64, Self::MAX_VALUE as i64) as u8;
        if clamped as i64 != raw {
            tracing::debug!(raw, clamped, "ability score clamped into range");
        }
        AbilityScore::from_clamped(clamped)
    }

    const fn from_clamped(value: u8) -> Self {
        AbilityScore {
            value,
            modifier: modifier_for(value),
        }
    }

    /// The clamped value
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The modifier derived from the value
    pub fn modifier(&self) -> i8 {
        self.modifier
    }

    /// Compare against an arbitrary, possibly absent, operand
    ///
    /// An absent operand orders below every ability score. Any operand that is
    /// not an `AbilityScore` is a [`AbilityScoreError::TypeMismatch`].
    pub fn compare_any(&self, other: Option<&dyn Any>) -> Result<Ordering, AbilityScoreError> {
        match other {
            None => Ok(Ordering::Greater),
            Some(other) => other
                .downcast_ref::<AbilityScore>()
                .map(|other| self.cmp(other))
                .ok_or(AbilityScoreError::TypeMismatch),
        }
    }

    /// Equality against an arbitrary, possibly absent, operand
    ///
    /// Never fails: absent operands and other types are simply not equal.
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<AbilityScore>())
            .is_some_and(|other| self == other)
    }

    /// Render with a format specifier (`G`, `M`, `L`, `R` or `C`, any case)
    ///
    /// `None` or an empty specifier renders `G`.
    pub fn render(
        &self,
        format: Option<&str>,
        numbers: &NumberFormat,
    ) -> Result<String, AbilityScoreError> {
        let spec = FormatSpec::parse_opt(format)?;
        Ok(self.render_with(spec, numbers))
    }

    /// Render with an already parsed format specifier
    pub fn render_with(&self, spec: FormatSpec, numbers: &NumberFormat) -> String {
        spec.layout(self.value, self.modifier, numbers)
    }

    /// Render with a format specifier and invariant number formatting
    pub fn to_string_with(&self, format: &str) -> Result<String, AbilityScoreError> {
        self.render(Some(format), &NumberFormat::invariant())
    }
}

const fn clamp_value(value: u8) -> u8 {
    if value <= AbilityScore::MIN_VALUE {
        AbilityScore::MIN_VALUE
    } else if value >= AbilityScore::MAX_VALUE {
        AbilityScore::MAX_VALUE
    } else {
        value
    }
}

// Floor division: 9 -> -1, 1 -> -5
const fn modifier_for(value: u8) -> i8 {
    (value as i8 - AbilityScore::AVERAGE_VALUE as i8).div_euclid(2)
}

impl Default for AbilityScore {
    fn default() -> Self {
        AbilityScore::AVERAGE
    }
}

impl PartialEq for AbilityScore {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for AbilityScore {}

impl PartialOrd for AbilityScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AbilityScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for AbilityScore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl From<u8> for AbilityScore {
    fn from(value: u8) -> Self {
        AbilityScore::new(value)
    }
}

impl From<AbilityScore> for u8 {
    fn from(score: AbilityScore) -> Self {
        score.value
    }
}

impl FromStr for AbilityScore {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s.trim().parse()?;
        Ok(AbilityScore::saturating(raw))
    }
}

/// `{}` renders the value, `{:#}` the value with its modifier
impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = if f.alternate() {
            FormatSpec::Modifier
        } else {
            FormatSpec::General
        };
        f.pad(&self.render_with(spec, &NumberFormat::invariant()))
    }
}

impl Serialize for AbilityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value)
    }
}

impl<'de> Deserialize<'de> for AbilityScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Stored data may have been edited by hand, so clamp again
        let raw = i64::deserialize(deserializer)?;
        Ok(AbilityScore::saturating(raw))
    }
}
