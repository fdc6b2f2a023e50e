//! Custom serde deserializers for flexible type handling
//!
//! The API is inconsistent about identifiers: the same `pk` is sent as a
//! JSON number on one endpoint and as a string on another.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum FlexibleId {
    String(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<FlexibleId> for String {
    fn from(id: FlexibleId) -> Self {
        match id {
            FlexibleId::String(s) => s,
            FlexibleId::Unsigned(n) => n.to_string(),
            FlexibleId::Signed(n) => n.to_string(),
        }
    }
}

/// Deserialize an identifier sent either as a string or as an integer
pub fn deserialize_flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    FlexibleId::deserialize(deserializer).map(String::from)
}

/// Optional variant of [`deserialize_flexible_id`]; `null` maps to `None`
pub fn deserialize_optional_flexible_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<FlexibleId> = Option::deserialize(deserializer)?;
    Ok(value.map(String::from))
}
