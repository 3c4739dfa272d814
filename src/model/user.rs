use std::{fmt, str::FromStr};

use dioxus_logger::tracing;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    error::FormError,
    model::id::{lenient_string, RecordId},
};

/// Whether an internet user's account is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserStatus {
    #[default]
    Active,
    Deactive,
}

impl UserStatus {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deactive => "deactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Deactive => "Deactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserStatus {
    type Err = FormError;

    /// Case-insensitive; the wizard offers `Active`, the filters `active`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "deactive" | "inactive" => Ok(Self::Deactive),
            other => Err(FormError::InvalidValue {
                field: "status",
                reason: format!("unknown status {other:?}"),
            }),
        }
    }
}

impl Serialize for UserStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient_string(deserializer)?;
        Ok(parse_or_default(&raw))
    }
}

/// Number of recorded policy violations, capped at two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationLevel {
    #[default]
    None,
    Warning,
    Blocked,
}

impl ViolationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Warning => "1",
            Self::Blocked => "2",
        }
    }

    pub fn count(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Warning => 1,
            Self::Blocked => 2,
        }
    }

    /// Presentation marker for a listing row.
    pub fn marker(&self) -> RowMarker {
        match self {
            Self::None => RowMarker::Plain,
            Self::Warning => RowMarker::Warning,
            Self::Blocked => RowMarker::Alert,
        }
    }
}

impl fmt::Display for ViolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViolationLevel {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::None),
            "1" => Ok(Self::Warning),
            "2" => Ok(Self::Blocked),
            other => Err(FormError::InvalidValue {
                field: "violations",
                reason: format!("expected 0, 1 or 2, got {other:?}"),
            }),
        }
    }
}

impl Serialize for ViolationLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ViolationLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient_string(deserializer)?;
        Ok(parse_or_default(&raw))
    }
}

/// Unknown stored values decode to the default so one bad record cannot
/// fail a whole collection.
fn parse_or_default<T>(raw: &str) -> T
where
    T: FromStr<Err = FormError> + Default,
{
    if raw.trim().is_empty() {
        return T::default();
    }
    raw.parse().unwrap_or_else(|err| {
        tracing::warn!("{}", err);
        T::default()
    })
}

/// Visual annotation of a listing row. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMarker {
    Plain,
    Warning,
    Alert,
}

impl RowMarker {
    pub fn row_class(&self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Warning => "border-l-4 border-warning",
            Self::Alert => "border-l-4 border-error bg-error/20",
        }
    }
}

/// An internet account managed by the console.
///
/// `directorate` and `deputy_ministry` hold record ids once the user has passed
/// through [`Directory::normalize_user`](crate::console::directory::Directory::normalize_user).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternetUser {
    pub id: RecordId,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub employment_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub directorate: String,
    #[serde(rename = "deputyMinistry", deserialize_with = "lenient_string")]
    pub deputy_ministry: String,
    #[serde(deserialize_with = "lenient_string")]
    pub position: String,
    #[serde(deserialize_with = "lenient_string")]
    pub device_limit: String,
    #[serde(deserialize_with = "lenient_string")]
    pub device_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub mac_address: String,
    pub status: UserStatus,
    pub violations: ViolationLevel,
    #[serde(deserialize_with = "lenient_string")]
    pub comment: String,
}

impl InternetUser {
    /// Label/value pairs for the detail view, in display order.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Username", self.username.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
            ("Employment Type", self.employment_type.clone()),
            ("Directorate", self.directorate.clone()),
            ("Deputy Ministry", self.deputy_ministry.clone()),
            ("Position", self.position.clone()),
            ("Device Limit", self.device_limit.clone()),
            ("Device Type", self.device_type.clone()),
            ("MAC Address", self.mac_address.clone()),
            ("Status", self.status.label().to_string()),
            ("Violations", self.violations.as_str().to_string()),
            ("Comment", self.comment.clone()),
        ]
    }
}

/// Body of `POST /internet_users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewInternetUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub employment_type: String,
    pub directorate: String,
    #[serde(rename = "deputyMinistry")]
    pub deputy_ministry: String,
    pub position: String,
    pub device_limit: String,
    pub device_type: String,
    pub mac_address: String,
    pub status: UserStatus,
    pub violations: ViolationLevel,
    pub comment: String,
}

/// Body of `PUT /internet_users/:id`, limited to the fields an operator may change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternetUserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directorate: Option<String>,
    #[serde(rename = "deputyMinistry", skip_serializing_if = "Option::is_none")]
    pub deputy_ministry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<ViolationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn changed<T: PartialEq + Clone>(before: &T, after: &T) -> Option<T> {
    (before != after).then(|| after.clone())
}

impl InternetUserPatch {
    /// Patch holding only the fields that differ between `before` and `after`.
    pub fn diff(before: &InternetUser, after: &InternetUser) -> Self {
        Self {
            name: changed(&before.name, &after.name),
            username: changed(&before.username, &after.username),
            email: changed(&before.email, &after.email),
            phone: changed(&before.phone, &after.phone),
            employment_type: changed(&before.employment_type, &after.employment_type),
            directorate: changed(&before.directorate, &after.directorate),
            deputy_ministry: changed(&before.deputy_ministry, &after.deputy_ministry),
            position: changed(&before.position, &after.position),
            device_limit: changed(&before.device_limit, &after.device_limit),
            device_type: changed(&before.device_type, &after.device_type),
            mac_address: changed(&before.mac_address, &after.mac_address),
            status: changed(&before.status, &after.status),
            violations: changed(&before.violations, &after.violations),
            comment: changed(&before.comment, &after.comment),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Boundary check run before an update request is issued.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.is_empty() {
            return Err(FormError::NothingToUpdate);
        }

        let required = [
            ("name", &self.name),
            ("username", &self.username),
            ("device_limit", &self.device_limit),
            ("device_type", &self.device_type),
        ];
        for (field, value) in required {
            if value.as_ref().is_some_and(|v| v.trim().is_empty()) {
                return Err(FormError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if let Some(limit) = &self.device_limit {
            validate_device_limit(limit)?;
        }

        Ok(())
    }
}

/// Device limits are whole, non-negative numbers.
pub fn validate_device_limit(value: &str) -> Result<u32, FormError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| FormError::InvalidValue {
            field: "device_limit",
            reason: format!("{value:?} is not a whole number"),
        })
}
