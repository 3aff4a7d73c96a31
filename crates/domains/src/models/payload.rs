//! Shape checks for raw request payloads.
//!
//! A payload is an arbitrary JSON value handed over by the transport. Each
//! `New*` entity names the string fields it needs and gets back either the
//! typed values or the first class of problem found: a missing field wins over
//! a mistyped one, mirroring how clients are expected to fix their requests.

use serde_json::Value;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldIssue {
    Missing,
    WrongType,
}

/// Human-facing messages for one kind of payload.
pub(crate) struct PayloadMessages {
    pub missing: &'static str,
    pub wrong_type: &'static str,
}

/// Extracts the listed string fields from `payload` in order.
///
/// Absent, `null` and empty-string fields count as missing. A payload that is
/// not a JSON object is reported as mistyped.
pub(crate) fn required_strings(
    payload: &Value,
    fields: &[&str],
    messages: &PayloadMessages,
) -> Result<Vec<String>, DomainError> {
    let Some(object) = payload.as_object() else {
        return Err(DomainError::Payload(messages.wrong_type.to_string()));
    };

    let checked: Vec<Result<&str, FieldIssue>> = fields
        .iter()
        .map(|field| match object.get(*field) {
            None | Some(Value::Null) => Err(FieldIssue::Missing),
            Some(Value::String(s)) if s.is_empty() => Err(FieldIssue::Missing),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(FieldIssue::WrongType),
        })
        .collect();

    if checked.iter().any(|c| matches!(c, Err(FieldIssue::Missing))) {
        return Err(DomainError::Payload(messages.missing.to_string()));
    }

    checked
        .into_iter()
        .map(|c| c.map(str::to_string))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| DomainError::Payload(messages.wrong_type.to_string()))
}

/// Fails with `missing` when any of `values` is empty.
pub(crate) fn require_present(values: &[&str], missing: &'static str) -> Result<(), DomainError> {
    if values.iter().any(|v| v.is_empty()) {
        return Err(DomainError::Payload(missing.to_string()));
    }
    Ok(())
}
