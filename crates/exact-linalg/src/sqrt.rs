//! Square roots of arbitrary-precision values by Heron's method.
//!
//! Iteration uses exact `BigInt` arithmetic truncated to a working scale a few digits
//! finer than what the caller asked for, so convergence never depends on the default
//! division precision of `BigDecimal`. The final value is rounded once, at the end, against
//! exact integer squares.

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};

use crate::config::{RoundingMode, SqrtConfig};
use crate::error::{LinalgError, Result};
use crate::validation;

/// Extra digits carried during iteration beyond the precision or output scale.
const GUARD_DIGITS: i64 = 4;

/// Values the square-root routine accepts.
pub trait Radicand {
    fn to_decimal(&self) -> BigDecimal;
}

impl Radicand for BigInt {
    fn to_decimal(&self) -> BigDecimal {
        BigDecimal::from(self.clone())
    }
}

impl Radicand for BigDecimal {
    fn to_decimal(&self) -> BigDecimal {
        self.clone()
    }
}

/// `coefficient × 10^exponent`, with `1 ≤ |coefficient| < 100` and an even exponent.
///
/// Zero is represented as `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScientificNotation {
    pub coefficient: BigDecimal,
    pub exponent: i64,
}

impl ScientificNotation {
    pub fn of(value: &BigDecimal) -> Self {
        if value.is_zero() {
            return Self {
                coefficient: BigDecimal::zero(),
                exponent: 0,
            };
        }
        let (digits, scale) = value.as_bigint_and_exponent();
        let digit_count = digits.magnitude().to_string().len() as i64;
        let exponent10 = digit_count - 1 - scale;
        let exponent = exponent10 - exponent10.rem_euclid(2);
        Self {
            coefficient: BigDecimal::new(digits, scale + exponent),
            exponent,
        }
    }

    /// Starting guess for `sqrt(coefficient × 10^exponent)`.
    ///
    /// `sqrt(1..10)` lies in `[1, 3.17)` and `sqrt(10..100)` in `[3.16, 10)`, so 2 and 6
    /// are within a factor of three of the true root.
    pub fn seed(&self) -> BigDecimal {
        let lead = if self.coefficient < BigDecimal::from(10) {
            2
        } else {
            6
        };
        BigDecimal::new(BigInt::from(lead), -(self.exponent / 2))
    }
}

/// Square root with the default configuration: precision `1e-10`, scale 10, half-up.
pub fn sqrt<R: Radicand + ?Sized>(value: &R) -> Result<BigDecimal> {
    sqrt_with(value, &SqrtConfig::default())
}

/// Iterate until consecutive approximations differ by less than `precision`, then round
/// half-up to the number of fractional digits in `precision`.
pub fn sqrt_to_precision<R: Radicand + ?Sized>(
    value: &R,
    precision: &BigDecimal,
) -> Result<BigDecimal> {
    validation::check_precision(precision)?;
    let scale = fractional_digits(precision);
    compute(value.to_decimal(), precision, scale, RoundingMode::HalfUp)
}

/// Square root rounded to `scale` fractional digits with `rounding`.
pub fn sqrt_to_scale<R: Radicand + ?Sized>(
    value: &R,
    scale: i64,
    rounding: RoundingMode,
) -> Result<BigDecimal> {
    validation::check_scale(scale)?;
    let digits = scale.checked_add(2).ok_or(LinalgError::Overflow("precision digits"))?;
    let precision = BigDecimal::new(BigInt::from(1), digits);
    compute(value.to_decimal(), &precision, scale, rounding)
}

/// Like [`sqrt_to_scale`], taking the rounding mode as its code in `[0, 7]`.
pub fn sqrt_to_scale_code<R: Radicand + ?Sized>(
    value: &R,
    scale: i64,
    rounding_code: i32,
) -> Result<BigDecimal> {
    validation::check_scale(scale)?;
    let rounding = RoundingMode::from_code(rounding_code)?;
    sqrt_to_scale(value, scale, rounding)
}

pub fn sqrt_with<R: Radicand + ?Sized>(value: &R, config: &SqrtConfig) -> Result<BigDecimal> {
    config.validate()?;
    compute(
        value.to_decimal(),
        &config.precision,
        config.scale,
        config.rounding,
    )
}

/// True iff some non-negative integer `k` has `k * k == value`.
pub fn is_perfect_square(value: &BigInt) -> bool {
    if value.sign() == Sign::Minus {
        return false;
    }
    let root = value.sqrt();
    &root * &root == *value
}

/// The integer root of a perfect square.
pub fn exact_sqrt(value: &BigInt) -> Result<BigInt> {
    if !is_perfect_square(value) {
        return Err(LinalgError::NotPerfectSquare(value.to_string()));
    }
    Ok(value.sqrt())
}

fn compute(
    radicand: BigDecimal,
    precision: &BigDecimal,
    scale: i64,
    rounding: RoundingMode,
) -> Result<BigDecimal> {
    if radicand < BigDecimal::zero() {
        return Err(LinalgError::NegativeRadicand(radicand.to_string()));
    }
    if radicand.is_zero() {
        return Ok(BigDecimal::new(BigInt::zero(), scale));
    }

    let work_scale = fractional_digits(precision)
        .max(scale)
        .checked_add(GUARD_DIGITS)
        .ok_or(LinalgError::Overflow("working scale"))?;
    let root = heron(&radicand, precision, work_scale)?;
    round_root(&radicand, &root, scale, rounding)
}

fn heron(radicand: &BigDecimal, precision: &BigDecimal, work_scale: i64) -> Result<BigDecimal> {
    let two = BigDecimal::from(2);
    let mut current = ScientificNotation::of(radicand).seed();
    let mut iterations = 0usize;
    loop {
        let numerator = &current * &current + radicand;
        let next = divide(&numerator, &(&two * &current), work_scale)?;
        iterations += 1;
        let delta = (&next - &current).abs();
        current = next;
        if delta < *precision {
            break;
        }
    }
    log::trace!(
        "sqrt({}) converged after {} iterations at working scale {}",
        radicand,
        iterations,
        work_scale
    );
    Ok(current)
}

/// Round the approximation of `sqrt(radicand)` to `scale` digits.
///
/// The approximation only locates the candidate; exactness and ties are decided on integer
/// squares. With `radicand × 10^(2·scale) = target / denominator`, the floor root `q` is the
/// largest integer with `q² × denominator ≤ target`.
fn round_root(
    radicand: &BigDecimal,
    approximation: &BigDecimal,
    scale: i64,
    rounding: RoundingMode,
) -> Result<BigDecimal> {
    let (digits, exponent) = radicand.as_bigint_and_exponent();
    let shift = scale
        .checked_mul(2)
        .and_then(|doubled| doubled.checked_sub(exponent))
        .ok_or(LinalgError::Overflow("rounding scale"))?;
    let (target, denominator) = if shift >= 0 {
        (digits * pow10(shift)?, BigInt::one())
    } else {
        (digits, pow10(negate(shift)?)?)
    };
    let fits = |q: &BigInt| q * q * &denominator <= target;

    let (mut floor, _) = approximation
        .with_scale_round(scale, bigdecimal::RoundingMode::Down)
        .as_bigint_and_exponent();
    while floor.is_positive() && !fits(&floor) {
        floor -= BigInt::one();
    }
    while fits(&(&floor + BigInt::one())) {
        floor += BigInt::one();
    }
    if &floor * &floor * &denominator == target {
        return Ok(BigDecimal::new(floor, scale));
    }

    let ceiling = &floor + BigInt::one();
    let root = match rounding {
        RoundingMode::Up | RoundingMode::Ceiling => ceiling,
        RoundingMode::Down | RoundingMode::Floor => floor,
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            let midpoint = &floor * BigInt::from(2) + BigInt::one();
            let quadrupled = &target * BigInt::from(4);
            match quadrupled.cmp(&(&midpoint * &midpoint * &denominator)) {
                Ordering::Less => floor,
                Ordering::Greater => ceiling,
                Ordering::Equal => match rounding {
                    RoundingMode::HalfUp => ceiling,
                    RoundingMode::HalfEven if (&floor % BigInt::from(2)).is_one() => ceiling,
                    _ => floor,
                },
            }
        }
        RoundingMode::Unnecessary => return Err(LinalgError::RoundingNecessary { scale }),
    };
    Ok(BigDecimal::new(root, scale))
}

/// `numerator / denominator` truncated to `scale` fractional digits.
fn divide(numerator: &BigDecimal, denominator: &BigDecimal, scale: i64) -> Result<BigDecimal> {
    let (n, n_scale) = numerator.as_bigint_and_exponent();
    let (d, d_scale) = denominator.as_bigint_and_exponent();
    let shift = scale
        .checked_add(d_scale)
        .and_then(|s| s.checked_sub(n_scale))
        .ok_or(LinalgError::Overflow("division scale"))?;
    let quotient = if shift >= 0 {
        n * pow10(shift)? / d
    } else {
        n / (d * pow10(negate(shift)?)?)
    };
    Ok(BigDecimal::new(quotient, scale))
}

fn negate(exponent: i64) -> Result<i64> {
    exponent.checked_neg().ok_or(LinalgError::Overflow("power of ten"))
}

fn pow10(exponent: i64) -> Result<BigInt> {
    let exponent = u32::try_from(exponent).map_err(|_| LinalgError::Overflow("power of ten"))?;
    Ok(BigInt::from(10u8).pow(exponent))
}

/// Number of digits after the decimal point once trailing zeros are dropped.
fn fractional_digits(value: &BigDecimal) -> i64 {
    value.normalized().as_bigint_and_exponent().1.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn scientific_notation_normalizes_to_even_exponent() {
        let sn = ScientificNotation::of(&dec("25"));
        assert_eq!(sn.exponent, 0);
        assert_eq!(sn.coefficient, dec("25"));

        let sn = ScientificNotation::of(&dec("0.0049"));
        assert_eq!(sn.exponent, -4);
        assert_eq!(sn.coefficient, dec("49"));

        let sn = ScientificNotation::of(&dec("5000"));
        assert_eq!(sn.exponent, 2);
        assert_eq!(sn.coefficient, dec("50"));

        let sn = ScientificNotation::of(&dec("123.45"));
        assert_eq!(sn.exponent, 2);
        assert_eq!(sn.coefficient, dec("1.2345"));
    }

    #[test]
    fn scientific_notation_of_zero_is_degenerate() {
        let sn = ScientificNotation::of(&BigDecimal::zero());
        assert!(sn.coefficient.is_zero());
        assert_eq!(sn.exponent, 0);
    }

    #[test]
    fn seed_picks_two_or_six() {
        assert_eq!(ScientificNotation::of(&dec("4")).seed(), dec("2"));
        assert_eq!(ScientificNotation::of(&dec("25")).seed(), dec("6"));
        assert_eq!(ScientificNotation::of(&dec("5000")).seed(), dec("60"));
        assert_eq!(ScientificNotation::of(&dec("0.0049")).seed(), dec("0.06"));
    }

    #[test]
    fn divide_truncates_at_scale() {
        assert_eq!(divide(&dec("1"), &dec("3"), 4).unwrap(), dec("0.3333"));
        assert_eq!(divide(&dec("10"), &dec("0.4"), 2).unwrap(), dec("25.00"));
        assert_eq!(divide(&dec("1e5"), &dec("3"), 0).unwrap(), dec("33333"));
    }

    #[test]
    fn fractional_digits_ignores_trailing_zeros() {
        assert_eq!(fractional_digits(&dec("0.00010")), 4);
        assert_eq!(fractional_digits(&dec("1e-10")), 10);
    }
}
