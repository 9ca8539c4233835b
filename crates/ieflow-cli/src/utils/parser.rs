use ieflow::engine::config::ScoreFilePolicy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Empty key in --set value '{0}'.")]
    EmptyKey(String),

    #[error("Invalid value '{value}' for '{key}': expected {expected}.")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Unknown score file policy '{0}'. Expected 'first-match' or 'all-matches'.")]
    UnknownPolicy(String),
}

/// Splits a `KEY=VALUE` override at the first `=`. The value may be empty or contain `=`.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(pair.to_string()));
    }
    Ok((key, value))
}

pub fn parse_number<T: std::str::FromStr>(
    key: &str,
    value: &str,
    expected: &'static str,
) -> Result<T, ParseError> {
    value.trim().parse().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    })
}

pub fn parse_policy(name: &str) -> Result<ScoreFilePolicy, ParseError> {
    match name.trim() {
        "first-match" => Ok(ScoreFilePolicy::FirstMatch),
        "all-matches" => Ok(ScoreFilePolicy::AllMatches),
        other => Err(ParseError::UnknownPolicy(other.to_string())),
    }
}
