//! The exact number model.
//!
//! A [`Number`] stores a rational value as a signed product of prime powers, for example
//! `0.75 = 2^-2 * 3`. Two sentinel keys are used alongside the primes: `-1`, whose exponent is the
//! sign (0 or 1), and `0`, which marks the number as zero.
//!
//! ```
//! use verbatim_parser::parser::ast::number::Number;
//!
//! let n = Number::from(0.25);
//! assert_eq!(n.value(), 0.25);
//! assert_eq!(n.factors().len(), 1);
//! ```

use crate::primitive::{factorize, int};
use log::warn;
use rug::{integer::IsPrime, ops::Pow, Integer, Rational};
use std::{collections::BTreeMap, fmt, ops::Add};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of decimal places reconstructed exactly when building a [`Number`] from a float.
pub const DECIMAL_SCALE: i32 = 4;

/// Mapping from prime (or sentinel) to exponent.
pub type Factors = BTreeMap<Integer, i64>;

/// Returns the canonical factors of zero.
fn zero_factors() -> Factors {
    Factors::from([(int(0), 1)])
}

/// Brings a factor mapping into canonical form:
///
/// - zero exponents and the key `1` are removed,
/// - other negative keys `-k` are split into `-1` and `k`,
/// - the exponent of `-1` is reduced to 0 or 1,
/// - any presence of the key `0` collapses the mapping to the canonical zero.
fn normalize(factors: Factors) -> Factors {
    let mut out = Factors::new();
    for (key, exp) in factors {
        if exp == 0 || key == 1 {
            continue;
        }
        if key == 0 {
            return zero_factors();
        }
        if key < -1 {
            *out.entry(int(-1)).or_insert(0) += exp;
            *out.entry(key.abs()).or_insert(0) += exp;
        } else {
            *out.entry(key).or_insert(0) += exp;
        }
    }

    let minus_one = int(-1);
    if let Some(sign) = out.get_mut(&minus_one) {
        *sign = sign.rem_euclid(2);
    }
    out.retain(|_, exp| *exp != 0);
    out
}

/// Counts repeated factors into a mapping.
fn count(factors: Vec<Integer>, sign: i64, into: &mut Factors) {
    for factor in factors {
        *into.entry(factor).or_insert(0) += sign;
    }
}

/// Computes the exact value of a factor mapping.
pub fn to_rational(factors: &Factors) -> Rational {
    if factors.contains_key(&int(0)) {
        return Rational::new();
    }

    let mut numer = int(1);
    let mut denom = int(1);
    for (key, &exp) in factors {
        let power = key.clone().pow(u32::try_from(exp.unsigned_abs()).unwrap_or(u32::MAX));
        if exp > 0 {
            numer *= power;
        } else {
            denom *= power;
        }
    }

    Rational::from((numer, denom))
}

/// Computes the scalar value of a factor mapping.
pub fn to_value(factors: &Factors) -> f64 {
    if factors.contains_key(&int(0)) {
        return 0.0;
    }
    to_rational(factors).to_f64()
}

/// Factorizes an exact rational into a canonical mapping.
pub fn from_rational(value: &Rational) -> Factors {
    if *value == 0 {
        return zero_factors();
    }

    let mut factors = Factors::new();
    count(factorize(value.numer()), 1, &mut factors);
    count(factorize(value.denom()), -1, &mut factors);
    normalize(factors)
}

/// Builds the factor mapping of a float: the value is scaled by `10^DECIMAL_SCALE`, rounded, and
/// factorized, then the scale is divided back out of the exponents of 2 and 5.
pub fn from_value(value: f64) -> Factors {
    if !value.is_finite() {
        warn!("cannot represent {} exactly, using 0", value);
        return zero_factors();
    }

    let scaled = (value * 10f64.powi(DECIMAL_SCALE)).round();
    let Some(scaled) = Integer::from_f64(scaled) else {
        warn!("cannot represent {} exactly, using 0", value);
        return zero_factors();
    };
    if scaled == 0 {
        if value != 0.0 {
            warn!("{} is too small to represent with {} decimal places, using 0", value, DECIMAL_SCALE);
        }
        return zero_factors();
    }

    let mut factors = Factors::new();
    count(factorize(&scaled), 1, &mut factors);
    *factors.entry(int(2)).or_insert(0) -= i64::from(DECIMAL_SCALE);
    *factors.entry(int(5)).or_insert(0) -= i64::from(DECIMAL_SCALE);
    normalize(factors)
}

/// Multiplies two factor mappings by adding their exponents. Returns [`None`] if an exponent
/// overflows.
pub fn multiply_factors(a: &Factors, b: &Factors) -> Option<Factors> {
    let mut out = a.clone();
    for (key, &exp) in b {
        let entry = out.entry(key.clone()).or_insert(0);
        *entry = entry.checked_add(exp)?;
    }
    Some(normalize(out))
}

/// Raises a factor mapping to an integer power by scaling its exponents. Returns [`None`] if an
/// exponent overflows.
pub fn power_factors(a: &Factors, n: i64) -> Option<Factors> {
    if n == 0 {
        return Some(Factors::new());
    }
    a.iter()
        .map(|(key, exp)| Some((key.clone(), exp.checked_mul(n)?)))
        .collect::<Option<Factors>>()
        .map(normalize)
}

/// Raises a factor mapping to a rational power by scaling its exponents. Returns [`None`] unless
/// every scaled exponent is an integer that fits in an `i64`.
///
/// `4^(1/2)` scales `{2: 2}` to `{2: 1}`, but `2^(1/2)` and `(-4)^(1/2)` have no exact mapping.
pub fn power_factors_rational(a: &Factors, r: &Rational) -> Option<Factors> {
    if *r == 0 {
        return Some(Factors::new());
    }
    a.iter()
        .map(|(key, &exp)| {
            let scaled = Rational::from(exp) * r;
            if !scaled.is_integer() {
                return None;
            }
            Some((key.clone(), scaled.numer().to_i64()?))
        })
        .collect::<Option<Factors>>()
        .map(normalize)
}

/// Returns true if every key of the mapping is a prime or a sentinel, so that two such mappings
/// are equal exactly when their values are.
///
/// Cofactors left by [`factorize`] past [`crate::primitive::TRIAL_DIVISION_LIMIT`], and keys passed
/// to [`Number::from_factors`], may be composite.
fn is_prime_keyed(factors: &Factors) -> bool {
    factors.keys().all(|key| *key <= 0 || key.is_probably_prime(30) != IsPrime::No)
}

/// An exact rational number, stored as its prime factorization.
///
/// Equality compares values. The factor mappings of equal numbers usually match, but a composite
/// cofactor left over by [`factorize`] can give the same value two different mappings.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Number {
    factors: Factors,
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        if self.factors == other.factors {
            return true;
        }
        if is_prime_keyed(&self.factors) && is_prime_keyed(&other.factors) {
            return false;
        }
        self.to_rational() == other.to_rational()
    }
}

impl Eq for Number {}

impl Number {
    /// Creates a number from a factor mapping, normalizing it.
    pub fn from_factors(factors: Factors) -> Self {
        Self { factors: normalize(factors) }
    }

    /// Creates a number with the value of the given integer.
    pub fn from_integer(n: &Integer) -> Self {
        Self::from_rational(&Rational::from(n))
    }

    /// Creates a number with the value of the given rational.
    pub fn from_rational(r: &Rational) -> Self {
        Self { factors: from_rational(r) }
    }

    /// The number zero.
    pub fn zero() -> Self {
        Self { factors: zero_factors() }
    }

    /// The number one.
    pub fn one() -> Self {
        Self { factors: Factors::new() }
    }

    /// Returns the factor mapping.
    pub fn factors(&self) -> &Factors {
        &self.factors
    }

    /// Returns the scalar value of the number.
    pub fn value(&self) -> f64 {
        to_value(&self.factors)
    }

    /// Returns the exact value of the number.
    pub fn to_rational(&self) -> Rational {
        to_rational(&self.factors)
    }

    /// Returns `-1` if the number is negative, and `1` otherwise (including for zero).
    pub fn sign(&self) -> i32 {
        match self.factors.get(&int(-1)) {
            Some(exp) if exp % 2 != 0 => -1,
            _ => 1,
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.factors.contains_key(&int(0))
    }

    /// Returns true if the number is one.
    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns true if the number is a non-negative integer.
    pub fn is_natural(&self) -> bool {
        self.is_zero() || (self.sign() == 1 && self.factors.values().all(|&exp| exp > 0))
    }

    /// Returns the number as a `u32` if it is a natural number that fits.
    pub fn to_natural(&self) -> Option<u32> {
        if !self.is_natural() {
            return None;
        }
        self.to_rational().numer().to_u32()
    }

    /// Raises the number to an integer power. Zero raised to a negative power is zero.
    ///
    /// Returns [`None`] if an exponent of the result overflows.
    pub fn pow(&self, n: i64) -> Option<Self> {
        if self.is_zero() {
            return Some(if n == 0 { Self::one() } else { Self::zero() });
        }
        power_factors(&self.factors, n).map(|factors| Self { factors })
    }

    /// Raises the number to the power of another number, by scaling exponents.
    ///
    /// Any exponent is accepted as long as the result is exact: `2^-1 = 0.5` and `4^0.5 = 2`, but
    /// `2^0.5` returns [`None`]. Zero follows [`Number::pow`]. Also returns [`None`] if an exponent
    /// of the result overflows.
    pub fn pow_number(&self, exponent: &Number) -> Option<Self> {
        if self.is_zero() {
            return Some(if exponent.is_zero() { Self::one() } else { Self::zero() });
        }
        power_factors_rational(&self.factors, &exponent.to_rational())
            .map(|factors| Self { factors })
    }

    /// Multiplies two numbers. Returns [`None`] if an exponent of the result overflows.
    pub fn checked_mul(&self, rhs: &Number) -> Option<Self> {
        multiply_factors(&self.factors, &rhs.factors).map(|factors| Self { factors })
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self { factors: from_value(value) }
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Number {
        let sum = self.to_rational() + rhs.to_rational();
        Number::from_rational(&sum)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
