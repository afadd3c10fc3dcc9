use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::str::FromStr;

use crate::error::{LinalgError, Result};
use crate::validation;

/// Decimal rounding rules, numbered by their conventional ordinal code.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    Up,
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    HalfEven,
    /// Assert that no rounding is needed; fails when the result is inexact.
    Unnecessary,
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::HalfUp
    }
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    /// Look up a rounding mode by its code in `[0, 7]`.
    pub fn from_code(code: i32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| LinalgError::InvalidRoundingMode(code.to_string()))
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for RoundingMode {
    type Error = LinalgError;

    fn try_from(code: i32) -> Result<Self> {
        RoundingMode::from_code(code)
    }
}

impl FromStr for RoundingMode {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "up" => Ok(RoundingMode::Up),
            "down" => Ok(RoundingMode::Down),
            "ceiling" => Ok(RoundingMode::Ceiling),
            "floor" => Ok(RoundingMode::Floor),
            "half_up" => Ok(RoundingMode::HalfUp),
            "half_down" => Ok(RoundingMode::HalfDown),
            "half_even" => Ok(RoundingMode::HalfEven),
            "unnecessary" => Ok(RoundingMode::Unnecessary),
            _ => Err(LinalgError::InvalidRoundingMode(s.to_string())),
        }
    }
}

/// Central configuration for the square-root routine and everything that delegates to it
/// (vector norms and distances).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SqrtConfig {
    /// Iteration stops once consecutive approximations differ by less than this.
    pub precision: BigDecimal,
    /// Digits kept after the decimal point in the final result.
    pub scale: i64,
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl SqrtConfig {
    pub const DEFAULT_PRECISION_DIGITS: i64 = 10;
    pub const DEFAULT_SCALE: i64 = 10;

    pub fn new(precision: BigDecimal, scale: i64, rounding: RoundingMode) -> Result<Self> {
        let config = Self {
            precision,
            scale,
            rounding,
        };
        config.validate()?;
        Ok(config)
    }

    /// `1e-10`
    pub fn default_precision() -> BigDecimal {
        BigDecimal::new(BigInt::from(1), Self::DEFAULT_PRECISION_DIGITS)
    }

    /// Re-check the invariants; needed after deserializing a config from untrusted input.
    pub fn validate(&self) -> Result<()> {
        validation::check_precision(&self.precision)?;
        validation::check_scale(self.scale)
    }
}

impl Default for SqrtConfig {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            scale: Self::DEFAULT_SCALE,
            rounding: RoundingMode::HalfUp,
        }
    }
}
