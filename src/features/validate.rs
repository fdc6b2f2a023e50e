//! Local argument validation shared by feature modules

use crate::{Error, Result};

const MAX_TEXT_LEN: usize = 2200;

/// Numeric account or object id
pub fn numeric_id<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::invalid_argument(name, "must not be empty"));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::invalid_argument(name, "must be numeric"));
    }
    Ok(value)
}

/// Media id: `<pk>` or `<pk>_<owner pk>`
pub fn media_id<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    let mut parts = value.splitn(2, '_');
    let pk = parts.next().unwrap_or_default();
    numeric_id(name, pk)?;
    if let Some(owner) = parts.next() {
        numeric_id(name, owner)?;
    }
    Ok(value)
}

/// Non-blank free text such as a query, comment or message
pub fn text<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_argument(name, "must not be blank"));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(Error::invalid_argument(
            name,
            format!("must be at most {MAX_TEXT_LEN} characters"),
        ));
    }
    Ok(trimmed)
}

/// Account name: 1-30 of letters, digits, `.` and `_`
///
/// A name may not start or end with `.` or contain `..`, which also keeps
/// it from rewriting the request path.
pub fn username<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim().trim_start_matches('@');
    let valid = (1..=30).contains(&value.len())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
        && !value.starts_with('.')
        && !value.ends_with('.')
        && !value.contains("..");
    if !valid {
        return Err(Error::invalid_argument(name, "not a valid username"));
    }
    Ok(value)
}

/// Hashtag without the leading `#`
pub fn hashtag<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim().trim_start_matches('#');
    if value.is_empty() || !value.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(Error::invalid_argument(name, "not a valid hashtag"));
    }
    Ok(value)
}

/// Pagination cursor; absent is fine, blank is not
pub fn cursor<'a>(name: &str, value: Option<&'a str>) -> Result<Option<&'a str>> {
    match value {
        Some(cursor) if cursor.trim().is_empty() => {
            Err(Error::invalid_argument(name, "must not be blank when given"))
        }
        Some(cursor) => Ok(Some(cursor.trim())),
        None => Ok(None),
    }
}

/// Non-empty list of numeric account ids
pub fn recipients(name: &str, values: &[&str]) -> Result<Vec<String>> {
    if values.is_empty() {
        return Err(Error::invalid_argument(name, "at least one recipient is required"));
    }
    values
        .iter()
        .map(|id| numeric_id(name, id).map(str::to_string))
        .collect()
}
