use serde::{Deserialize, Serialize};

use crate::model::{
    id::{lenient_count, lenient_string, RecordId},
    user::InternetUser,
};

/// A recorded policy infraction, as stored by `POST /violations`.
///
/// Overlaps with the violation fields carried on [`InternetUser`]; the two are
/// submitted independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Violation {
    #[serde(skip_serializing_if = "RecordId::is_empty")]
    pub id: RecordId,
    #[serde(deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub position: String,
    #[serde(deserialize_with = "lenient_string")]
    pub deputy_ministry: String,
    #[serde(deserialize_with = "lenient_string")]
    pub directorate: String,
    #[serde(deserialize_with = "lenient_string")]
    pub user_signature: String,
    #[serde(deserialize_with = "lenient_string")]
    pub directorate_signature: String,
    #[serde(deserialize_with = "lenient_string")]
    pub comment: String,
    #[serde(deserialize_with = "lenient_count")]
    pub violation_count: u8,
}

impl Violation {
    /// Build the record submitted for `user`.
    pub fn for_user(user: &InternetUser) -> Self {
        Self {
            id: RecordId::default(),
            username: user.username.clone(),
            name: user.name.clone(),
            position: user.position.clone(),
            deputy_ministry: user.deputy_ministry.clone(),
            directorate: user.directorate.clone(),
            user_signature: String::new(),
            directorate_signature: String::new(),
            comment: user.comment.clone(),
            violation_count: user.violations.count(),
        }
    }
}
