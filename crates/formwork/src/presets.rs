//! Built-in preset validator factories.
//!
//! Every factory here has the [`crate::PresetFactory`] signature: it takes
//! the descriptor's parameter payload and the field's custom message, and
//! returns a [`CompiledValidator`] or a reason string when the payload is
//! unusable. [`crate::ValidatorRegistry::new`] registers all of them.
//!
//! Presets only pass for values in their domain: `email` on a number is a
//! plain failure, not an error.

use regex::Regex;
use serde_json::Value;

use crate::validation::CompiledValidator;

/// Minimum password length applied when the `password` preset is given no
/// parameter.
pub const DEFAULT_PASSWORD_LENGTH: f64 = 8.0;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const PHONE_PATTERN: &str = r"^\+?[0-9\s().-]+$";

/// Extracts the numeric parameter a bound preset requires.
fn number_param(name: &str, params: Option<&Value>) -> Result<f64, String> {
    params
        .and_then(Value::as_f64)
        .ok_or_else(|| format!("{name} needs a numeric parameter"))
}

/// Lower bound: numbers must be at least the bound, strings must have at
/// least that many characters.
pub fn min(params: Option<&Value>, message: Option<&str>) -> Result<CompiledValidator, String> {
    let bound = number_param("min", params)?;
    let message = message
        .map_or_else(|| format!("Value must be at least {bound}."), str::to_string);

    Ok(CompiledValidator::new(
        move |value| match value {
            Value::Number(number) => number.as_f64().is_some_and(|n| n >= bound),
            Value::String(text) => text.chars().count() as f64 >= bound,
            _ => false,
        },
        message,
    ))
}

/// Upper bound: numbers must be at most the bound, strings must have at
/// most that many characters.
pub fn max(params: Option<&Value>, message: Option<&str>) -> Result<CompiledValidator, String> {
    let bound = number_param("max", params)?;
    let message = message
        .map_or_else(|| format!("Value must be at most {bound}."), str::to_string);

    Ok(CompiledValidator::new(
        move |value| match value {
            Value::Number(number) => number.as_f64().is_some_and(|n| n <= bound),
            Value::String(text) => text.chars().count() as f64 <= bound,
            _ => false,
        },
        message,
    ))
}

/// Email addresses.
pub fn email(_params: Option<&Value>, message: Option<&str>) -> Result<CompiledValidator, String> {
    let pattern = Regex::new(EMAIL_PATTERN).map_err(|err| err.to_string())?;
    let message = message.unwrap_or("Enter a valid email address.").to_string();

    Ok(CompiledValidator::new(
        move |value| value.as_str().is_some_and(|text| pattern.is_match(text)),
        message,
    ))
}

/// Phone numbers: an optional leading `+`, digits with common separators,
/// and at least seven digits overall.
pub fn phone(_params: Option<&Value>, message: Option<&str>) -> Result<CompiledValidator, String> {
    let pattern = Regex::new(PHONE_PATTERN).map_err(|err| err.to_string())?;
    let message = message.unwrap_or("Enter a valid phone number.").to_string();

    Ok(CompiledValidator::new(
        move |value| {
            value.as_str().is_some_and(|text| {
                pattern.is_match(text)
                    && text.chars().filter(char::is_ascii_digit).count() >= 7
            })
        },
        message,
    ))
}

/// URLs: `http://` or `https://` followed by a non-empty remainder.
pub fn url(_params: Option<&Value>, message: Option<&str>) -> Result<CompiledValidator, String> {
    let message = message.unwrap_or("Enter a valid URL.").to_string();

    Ok(CompiledValidator::new(
        |value| {
            value.as_str().is_some_and(|text| {
                text.strip_prefix("http://")
                    .or_else(|| text.strip_prefix("https://"))
                    .is_some_and(|rest| !rest.is_empty())
            })
        },
        message,
    ))
}

/// Passwords: at least the parameter's length (default
/// [`DEFAULT_PASSWORD_LENGTH`]) with at least one letter and one digit.
pub fn password(params: Option<&Value>, message: Option<&str>) -> Result<CompiledValidator, String> {
    let min_length = match params {
        None | Some(Value::Null) => DEFAULT_PASSWORD_LENGTH,
        Some(value) => value
            .as_f64()
            .ok_or_else(|| "password needs a numeric parameter".to_string())?,
    };
    let message = message.map_or_else(
        || format!("Password must be at least {min_length} characters and contain letters and digits."),
        str::to_string,
    );

    Ok(CompiledValidator::new(
        move |value| {
            value.as_str().is_some_and(|text| {
                text.chars().count() as f64 >= min_length
                    && text.chars().any(char::is_alphabetic)
                    && text.chars().any(|c| c.is_ascii_digit())
            })
        },
        message,
    ))
}
