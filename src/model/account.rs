use serde::{Deserialize, Serialize};

use crate::{
    error::FormError,
    model::id::{lenient_string, RecordId},
};

/// An operator account of the console itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemUser {
    pub id: RecordId,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSystemUser {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Body of `PUT /users/:id`. A `None` password leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemUserPatch {
    pub name: String,
    pub email: String,
    #[serde(rename = "isAdmin", skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl SystemUserPatch {
    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [("name", &self.name), ("email", &self.email)] {
            if value.trim().is_empty() {
                return Err(FormError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The logged-in operator, persisted as the session marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionUser {
    pub id: RecordId,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SessionUser {
    /// Decode a stored marker. Absent or unparsable values mean "not authenticated".
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        serde_json::from_str(raw?).ok()
    }
}
