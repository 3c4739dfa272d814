//! Record identifiers and lenient scalar decoding.
//!
//! The backend is untyped JSON: ids arrive as strings for some collections and as
//! numbers for others, and numeric form fields may be stored either way. Both are
//! normalised to strings at the boundary.

use std::fmt;

use dioxus_logger::tracing;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a backend record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_string(deserializer).map(Self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// Decode a JSON string, number, boolean or null into a `String`.
///
/// `null` becomes the empty string.
pub fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Null => String::new(),
    })
}

/// Decode a small count from a string, number or null.
///
/// `null`, blanks and unparseable values become zero.
pub fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = lenient_string(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    Ok(raw.parse().unwrap_or_else(|_| {
        tracing::warn!("Ignoring invalid count {:?}", raw);
        0
    }))
}
