//! Option instrument vocabulary.
//!
//! The engine supports exactly four contracts: the product of
//! [`OptionStyle`] and [`OptionType`]. Keeping both as closed enums makes the
//! four-combination closure a compile-time invariant; dispatch happens
//! through exhaustive `match` rather than string comparison.
//!
//! The `FromStr` implementations accept the wire spellings used by the
//! configuration surface: `call`/`put` and `european`/`asiatic`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Call or put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: pays when the reference price exceeds the strike.
    Call,
    /// Put option: pays when the strike exceeds the reference price.
    Put,
}

/// Exercise style determining which prices enter the payoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionStyle {
    /// Payoff depends only on the terminal price.
    European,
    /// Payoff depends on the arithmetic average price over the path.
    #[cfg_attr(feature = "serde", serde(rename = "asiatic"))]
    Asian,
}

/// Error returned when parsing an unrecognised instrument token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised {kind} '{token}' (expected one of: {expected})")]
pub struct ParseInstrumentError {
    /// What was being parsed ("option type" or "option style").
    pub kind: &'static str,
    /// The offending input token.
    pub token: String,
    /// Comma-separated list of accepted spellings.
    pub expected: &'static str,
}

impl OptionType {
    /// Returns the wire spelling (`call` / `put`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }
}

impl OptionStyle {
    /// Returns the wire spelling (`european` / `asiatic`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::European => "european",
            Self::Asian => "asiatic",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = ParseInstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            _ => Err(ParseInstrumentError {
                kind: "option type",
                token: s.to_string(),
                expected: "call, put",
            }),
        }
    }
}

impl FromStr for OptionStyle {
    type Err = ParseInstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "european" => Ok(Self::European),
            // The configuration surface spells the Asian style "asiatic"
            "asiatic" | "asian" => Ok(Self::Asian),
            _ => Err(ParseInstrumentError {
                kind: "option style",
                token: s.to_string(),
                expected: "european, asiatic",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type_round_trip() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(OptionType::Call.to_string(), "call");
        assert_eq!(OptionType::Put.to_string(), "put");
    }

    #[test]
    fn test_option_style_round_trip() {
        assert_eq!(
            "european".parse::<OptionStyle>().unwrap(),
            OptionStyle::European
        );
        assert_eq!(
            "asiatic".parse::<OptionStyle>().unwrap(),
            OptionStyle::Asian
        );
        assert_eq!("Asian".parse::<OptionStyle>().unwrap(), OptionStyle::Asian);
        assert_eq!(OptionStyle::Asian.to_string(), "asiatic");
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        let err = "bermudan".parse::<OptionStyle>().unwrap_err();
        assert_eq!(err.token, "bermudan");
        assert!(err.to_string().contains("option style"));

        assert!("straddle".parse::<OptionType>().is_err());
    }
}
