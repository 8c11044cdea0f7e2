//! Image record — one gallery entry as stored and rendered.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder used when a record has no name.
pub const DEFAULT_NAME: &str = "plant from anonymous";
/// Placeholder used when a record has no username.
pub const DEFAULT_USERNAME: &str = "anonymous";

/// A persisted gallery image and its metadata. Mirrors the store's image table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: i64,
    #[serde(rename = "imageSrc")]
    pub image_src: String,
    #[serde(default = "default_name", deserialize_with = "name_or_default")]
    pub name: String,
    #[serde(default = "default_username", deserialize_with = "username_or_default")]
    pub username: String,
}

impl ImageRecord {
    /// Build a record, substituting placeholders for empty or absent
    /// `name` and `username`.
    #[must_use]
    pub fn new(id: i64, image_src: impl Into<String>, name: Option<&str>, username: Option<&str>) -> Self {
        Self {
            id,
            image_src: image_src.into(),
            name: or_placeholder(name, DEFAULT_NAME),
            username: or_placeholder(username, DEFAULT_USERNAME),
        }
    }
}

/// Id for a record appended after `amount` existing ones.
///
/// Derived from the local list length, not the store's counter, so two
/// sessions appending concurrently can produce the same id.
#[must_use]
pub fn next_id(amount: usize) -> i64 {
    i64::try_from(amount).map_or(i64::MAX, |n| n.saturating_add(1))
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => placeholder.to_owned(),
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_owned()
}

fn default_username() -> String {
    DEFAULT_USERNAME.to_owned()
}

fn name_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(or_placeholder(raw.as_deref(), DEFAULT_NAME))
}

fn username_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(or_placeholder(raw.as_deref(), DEFAULT_USERNAME))
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
