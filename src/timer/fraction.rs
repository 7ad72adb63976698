// src/timer/fraction.rs — Break-fraction parsing
//
// The fraction field is free text, but only a tiny numeric grammar is
// accepted:
//
//   fraction := integer | integer "/" integer | decimal
//   integer  := digit+
//   decimal  := digit+ "." digit* | "." digit+
//
// Whitespace is allowed around the whole input and around "/". Signs,
// exponents, names and anything resembling an expression are rejected.

use std::str::FromStr;

use thiserror::Error;

/// Why a break-fraction string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    #[error("the fraction is empty")]
    Empty,

    #[error("'{input}' is not an integer, decimal or ratio")]
    Malformed { input: String },

    #[error("denominator is zero")]
    ZeroDenominator,

    #[error("'{input}' is too large")]
    TooLarge { input: String },
}

/// A validated, non-negative break multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fraction(f64);

impl Fraction {
    /// Break length, in seconds, earned by `work_seconds` of work.
    pub fn apply(self, work_seconds: f64) -> f64 {
        work_seconds * self.0
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(FractionError::Empty);
        }

        if let Some((num, den)) = input.split_once('/') {
            let num = parse_integer(num.trim(), input)?;
            let den = parse_integer(den.trim(), input)?;
            if den == 0 {
                return Err(FractionError::ZeroDenominator);
            }
            return Ok(Fraction(num as f64 / den as f64));
        }

        if input.contains('.') {
            parse_decimal(input).map(Fraction)
        } else {
            parse_integer(input, input).map(|n| Fraction(n as f64))
        }
    }
}

fn malformed(input: &str) -> FractionError {
    FractionError::Malformed {
        input: input.to_string(),
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_integer(digits: &str, input: &str) -> Result<u64, FractionError> {
    if digits.is_empty() || !is_digits(digits) {
        return Err(malformed(input));
    }
    digits.parse::<u64>().map_err(|_| FractionError::TooLarge {
        input: input.to_string(),
    })
}

fn parse_decimal(input: &str) -> Result<f64, FractionError> {
    let (whole, frac) = input.split_once('.').ok_or_else(|| malformed(input))?;
    if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
        return Err(malformed(input));
    }

    // Normalise "5." and ".5" so the float parser sees a plain literal.
    let literal = format!(
        "{}.{}",
        if whole.is_empty() { "0" } else { whole },
        if frac.is_empty() { "0" } else { frac }
    );
    let value: f64 = literal.parse().map_err(|_| malformed(input))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FractionError::TooLarge {
            input: input.to_string(),
        })
    }
}
