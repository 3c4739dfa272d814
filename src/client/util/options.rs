//! `(value, label)` pairs for dropdowns. Values are record ids.

use netroster::{console::directory::Directory, model::user::UserStatus};

pub fn deputy_ministry_options(directory: &Directory) -> Vec<(String, String)> {
    directory
        .deputy_ministries
        .iter()
        .map(|ministry| (ministry.id.to_string(), ministry.name.clone()))
        .collect()
}

/// Directorates under `ministry`, or all when no ministry is selected.
pub fn directorate_options(directory: &Directory, ministry: &str) -> Vec<(String, String)> {
    directory
        .directorates_in(ministry)
        .into_iter()
        .map(|directorate| (directorate.id.to_string(), directorate.name.clone()))
        .collect()
}

/// Like [`directorate_options`], narrowed by a typed `term`, keeping `selected`.
pub fn matching_directorate_options(
    directory: &Directory,
    ministry: &str,
    term: &str,
    selected: &str,
) -> Vec<(String, String)> {
    directory
        .directorates_matching(ministry, term, selected)
        .into_iter()
        .map(|directorate| (directorate.id.to_string(), directorate.name.clone()))
        .collect()
}

pub fn employment_type_options(directory: &Directory) -> Vec<(String, String)> {
    directory
        .employment_type_labels()
        .into_iter()
        .map(|label| (label.to_string(), label.to_string()))
        .collect()
}

pub fn status_options() -> Vec<(String, String)> {
    [UserStatus::Active, UserStatus::Deactive]
        .iter()
        .map(|status| (status.as_str().to_string(), status.label().to_string()))
        .collect()
}

pub fn violation_options() -> Vec<(String, String)> {
    vec![
        ("0".to_string(), "0 - None".to_string()),
        ("1".to_string(), "1 - Warning".to_string()),
        ("2".to_string(), "2 - Blocked".to_string()),
    ]
}
