use serde::{Deserialize, Serialize};

use crate::{
    error::FormError,
    model::id::{lenient_string, RecordId},
};

/// Top-level organisational unit; parent of directorates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeputyMinistry {
    pub id: RecordId,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
}

/// Body of `POST /deputy_ministries` and `PUT /deputy_ministries/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeputyMinistryDraft {
    pub name: String,
}

impl DeputyMinistryDraft {
    pub fn new(name: &str) -> Result<Self, FormError> {
        Ok(Self {
            name: required_name(name)?,
        })
    }
}

/// Sub-unit of a deputy ministry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Directorate {
    pub id: RecordId,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "deputyMinistryId")]
    pub deputy_ministry_id: RecordId,
}

/// Body of `POST /directorates` and `PUT /directorates/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorateDraft {
    pub name: String,
    #[serde(rename = "deputyMinistryId")]
    pub deputy_ministry_id: RecordId,
}

impl DirectorateDraft {
    pub fn new(name: &str, deputy_ministry_id: &RecordId) -> Result<Self, FormError> {
        let name = required_name(name)?;
        if deputy_ministry_id.as_str().trim().is_empty() {
            return Err(FormError::InvalidValue {
                field: "deputyMinistryId",
                reason: "a deputy ministry must be selected".to_string(),
            });
        }

        Ok(Self {
            name,
            deputy_ministry_id: deputy_ministry_id.clone(),
        })
    }
}

/// Free-form employment category label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentType {
    pub id: RecordId,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
}

fn required_name(name: &str) -> Result<String, FormError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::InvalidValue {
            field: "name",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(name.to_string())
}
