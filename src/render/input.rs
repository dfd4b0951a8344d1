use thiserror::Error;

use crate::core::{AllocationInput, MAX_AGE, MIN_AGE, RiskProfile, select_fund_set};

/// Field values exactly as the UI controls report them.
#[derive(Debug, Clone, Copy)]
pub struct RawInputs<'a> {
    pub age: &'a str,
    pub simplicity: &'a str,
    pub risk_level: &'a str,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("age must be a whole number, got {0:?}")]
    AgeNotNumeric(String),
    #[error("age must be between 18 and 100, got {0}")]
    AgeOutOfRange(i64),
    #[error("risk level must be 1, 2 or 3, got {0:?}")]
    InvalidRiskLevel(String),
}

/// Lenient integer parse: leading whitespace, an optional sign, then as many
/// digits as are present. Trailing garbage is ignored ("42abc" is 42).
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

pub fn parse_age(text: &str) -> Result<u32, InputError> {
    let age = parse_int(text).ok_or_else(|| InputError::AgeNotNumeric(text.to_string()))?;
    match u32::try_from(age) {
        Ok(valid) if (MIN_AGE..=MAX_AGE).contains(&valid) => Ok(valid),
        _ => Err(InputError::AgeOutOfRange(age)),
    }
}

pub fn parse_risk_level(text: &str) -> Result<RiskProfile, InputError> {
    parse_int(text)
        .and_then(RiskProfile::from_level)
        .ok_or_else(|| InputError::InvalidRiskLevel(text.to_string()))
}

/// Validates the raw fields into a calculator input. Simplicity never fails:
/// unreadable or unknown levels select the simple fund set.
pub fn parse_inputs(raw: &RawInputs<'_>) -> Result<AllocationInput, InputError> {
    let age = parse_age(raw.age)?;
    let risk_profile = parse_risk_level(raw.risk_level)?;
    let fund_set = select_fund_set(parse_int(raw.simplicity).unwrap_or(1));
    Ok(AllocationInput {
        age,
        risk_profile,
        fund_set,
    })
}
