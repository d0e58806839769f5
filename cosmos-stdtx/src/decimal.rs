//! Exact decimal amounts (`sdk.Int` / `sdk.Dec` in their JSON form)

use crate::error::{Error, ErrorKind};
use anomaly::{fail, format_err};
use serde::{de, Deserialize, Serialize};
use serde_json::Value;
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Non-negative decimal number kept as its exact textual representation.
///
/// Amounts never pass through binary floating point: numeric JSON input is
/// taken verbatim from the source text (`serde_json` is built with
/// `arbitrary_precision`), and serialization always emits a JSON string.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Decimal(String);

impl Decimal {
    /// Coerce a JSON number or string into a [`Decimal`]
    pub fn from_json_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::String(s) => s.parse(),
            Value::Number(n) => n.to_string().parse(),
            other => fail!(
                ErrorKind::MalformedInput,
                "expected decimal amount, got: {}",
                other
            ),
        }
    }

    /// Is this amount equal to zero?
    pub fn is_zero(&self) -> bool {
        self.0.chars().all(|c| c == '0' || c == '.')
    }

    /// Normalize to exactly `places` fractional digits, the JSON form of a
    /// fixed-precision `sdk.Dec` (or of an `sdk.Int` when `places` is zero).
    ///
    /// Leading zeros are stripped. Fails if the amount carries significant
    /// digits beyond `places`.
    pub fn with_precision(&self, places: usize) -> Result<Self, Error> {
        let (int_part, frac_part) = self.0.split_once('.').unwrap_or((&self.0, ""));

        let int_part = match int_part.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };

        let frac_part = frac_part.trim_end_matches('0');

        if frac_part.len() > places {
            fail!(
                ErrorKind::MalformedInput,
                "`{}` has more than {} decimal places",
                self,
                places
            );
        }

        if places == 0 {
            return Ok(Decimal(int_part.to_owned()));
        }

        Ok(Decimal(format!(
            "{}.{:0<width$}",
            int_part,
            frac_part,
            width = places
        )))
    }

    /// Borrow the decimal string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (s, None),
        };

        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        if !is_digits(int_part) || !frac_part.map(is_digits).unwrap_or(true) {
            return Err(format_err!(ErrorKind::MalformedInput, "invalid decimal: `{}`", s).into());
        }

        Ok(Decimal(s.to_owned()))
    }
}

impl From<u64> for Decimal {
    fn from(n: u64) -> Decimal {
        Decimal(n.to_string())
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Decimal::from_json_value(&value).map_err(de::Error::custom)
    }
}
