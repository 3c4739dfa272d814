//! Client-side predicates over fetched collections.
//!
//! The visible set of a listing is the fetched collection narrowed by the
//! conjunction of every active predicate. Predicates are pure and cheap; they are
//! recomputed on each filter change.

use crate::model::{
    id::RecordId,
    user::{InternetUser, UserStatus},
};

/// Dropdown value meaning "do not filter on this dimension".
pub const ALL: &str = "";

/// Case-insensitive substring match of `term` against any of `fields`.
///
/// An empty term matches everything.
pub fn matches_search<I, S>(fields: I, term: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.as_ref().to_lowercase().contains(&term))
}

/// Exact match, or pass-through when `selected` is [`ALL`].
pub fn matches_choice(selected: &str, value: &str) -> bool {
    selected == ALL || selected == value
}

/// Items for which `term` matches at least one of the fields produced by `fields`.
pub fn search<'a, T, F, I, S>(items: &'a [T], term: &str, fields: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .iter()
        .filter(|item| matches_search(fields(*item), term))
        .collect()
}

/// Fields the internet-user listing searches.
pub fn user_search_fields(user: &InternetUser) -> [&str; 3] {
    [user.name.as_str(), user.username.as_str(), user.phone.as_str()]
}

/// Independent filter state of the internet-user listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    /// Selected deputy ministry id, or [`ALL`]
    pub deputy_ministry: String,
    /// Selected directorate id, or [`ALL`]
    pub directorate: String,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_deputy_ministry(mut self, id: &RecordId) -> Self {
        self.deputy_ministry = id.to_string();
        self
    }

    pub fn with_directorate(mut self, id: &RecordId) -> Self {
        self.directorate = id.to_string();
        self
    }

    pub fn with_status(mut self, status: Option<UserStatus>) -> Self {
        self.status = status;
        self
    }

    /// Parse the status dropdown value; [`ALL`] or anything unknown clears it.
    pub fn set_status(&mut self, value: &str) {
        self.status = value.parse().ok();
    }

    /// `true` when at least one equality dimension is selected.
    pub fn has_selection(&self) -> bool {
        self.deputy_ministry != ALL || self.directorate != ALL || self.status.is_some()
    }

    pub fn matches(&self, user: &InternetUser) -> bool {
        self.matches_selection(user) && matches_search(user_search_fields(user), &self.search)
    }

    pub fn matches_selection(&self, user: &InternetUser) -> bool {
        matches_choice(&self.deputy_ministry, &user.deputy_ministry)
            && matches_choice(&self.directorate, &user.directorate)
            && self.status.map_or(true, |status| status == user.status)
    }

    pub fn apply<'a>(&self, users: &'a [InternetUser]) -> Vec<&'a InternetUser> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}
