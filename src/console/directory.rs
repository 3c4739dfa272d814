//! Organisational lookup tables.
//!
//! Internet users reference their directorate and deputy ministry by record id. Older
//! records carry display names instead; [`Directory::normalize_user`] rewrites those to
//! ids at fetch time so filters and edits only ever deal with ids.

use dioxus_logger::tracing;

use crate::{
    api::Backend,
    console::filter::matches_search,
    error::ApiError,
    model::{
        id::RecordId,
        org::{DeputyMinistry, Directorate, EmploymentType},
        user::InternetUser,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub deputy_ministries: Vec<DeputyMinistry>,
    pub directorates: Vec<Directorate>,
    pub employment_types: Vec<EmploymentType>,
}

/// Failed lookups are logged and leave their table empty.
fn or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(ApiError::Cancelled) => Vec::new(),
        Err(err) => {
            tracing::error!(lookup = what, "Error fetching select options: {}", err);
            Vec::new()
        }
    }
}

impl Directory {
    /// Fetch all three lookup collections in parallel.
    pub async fn load<B: Backend>(backend: &B) -> Self {
        let (deputy_ministries, directorates, employment_types) = futures::join!(
            backend.list::<DeputyMinistry>(),
            backend.list::<Directorate>(),
            backend.list::<EmploymentType>(),
        );

        Self {
            deputy_ministries: or_empty("deputy_ministries", deputy_ministries),
            directorates: or_empty("directorates", directorates),
            employment_types: or_empty("employment_type", employment_types),
        }
    }

    pub fn deputy_ministry(&self, id: &str) -> Option<&DeputyMinistry> {
        self.deputy_ministries
            .iter()
            .find(|ministry| ministry.id.as_str() == id)
    }

    pub fn directorate(&self, id: &str) -> Option<&Directorate> {
        self.directorates
            .iter()
            .find(|directorate| directorate.id.as_str() == id)
    }

    /// Display name for a deputy ministry reference, or the raw value if unknown.
    pub fn deputy_ministry_name<'a>(&'a self, reference: &'a str) -> &'a str {
        self.deputy_ministry(reference)
            .map_or(reference, |ministry| ministry.name.as_str())
    }

    /// Display name for a directorate reference, or the raw value if unknown.
    pub fn directorate_name<'a>(&'a self, reference: &'a str) -> &'a str {
        self.directorate(reference)
            .map_or(reference, |directorate| directorate.name.as_str())
    }

    /// Parent ministry of `directorate`.
    pub fn parent_of(&self, directorate: &Directorate) -> Option<&DeputyMinistry> {
        self.deputy_ministry(directorate.deputy_ministry_id.as_str())
    }

    /// Directorates under `ministry`, or all of them when no ministry is selected.
    pub fn directorates_in(&self, ministry: &str) -> Vec<&Directorate> {
        self.directorates
            .iter()
            .filter(|directorate| {
                ministry.is_empty() || directorate.deputy_ministry_id.as_str() == ministry
            })
            .collect()
    }

    /// [`directorates_in`](Self::directorates_in) narrowed to names containing `term`.
    ///
    /// The directorate with id `keep` stays listed so a current selection survives.
    pub fn directorates_matching(&self, ministry: &str, term: &str, keep: &str) -> Vec<&Directorate> {
        self.directorates_in(ministry)
            .into_iter()
            .filter(|directorate| {
                matches_search([directorate.name.as_str()], term)
                    || (!keep.is_empty() && directorate.id.as_str() == keep)
            })
            .collect()
    }

    pub fn employment_type_labels(&self) -> Vec<&str> {
        self.employment_types
            .iter()
            .map(|kind| kind.kind.as_str())
            .collect()
    }

    /// Rewrite name-based references of `user` to record ids.
    ///
    /// References that are already ids, or that match nothing, are left untouched.
    pub fn normalize_user(&self, mut user: InternetUser) -> InternetUser {
        if self.deputy_ministry(&user.deputy_ministry).is_none() {
            if let Some(ministry) = self
                .deputy_ministries
                .iter()
                .find(|ministry| ministry.name == user.deputy_ministry)
            {
                user.deputy_ministry = ministry.id.to_string();
            }
        }

        if self.directorate(&user.directorate).is_none() {
            if let Some(directorate) = self
                .directorates
                .iter()
                .find(|directorate| directorate.name == user.directorate)
            {
                user.directorate = directorate.id.to_string();
            }
        }

        user
    }

    pub fn normalize_users(&self, users: Vec<InternetUser>) -> Vec<InternetUser> {
        users
            .into_iter()
            .map(|user| self.normalize_user(user))
            .collect()
    }

    /// Directorate search: name or parent ministry name.
    pub fn directorate_search_fields<'a>(&'a self, directorate: &'a Directorate) -> [&'a str; 2] {
        let parent = self.parent_of(directorate).map_or("", |ministry| ministry.name.as_str());
        [directorate.name.as_str(), parent]
    }

    /// `true` if `id` refers to a loaded deputy ministry.
    pub fn has_deputy_ministry(&self, id: &RecordId) -> bool {
        self.deputy_ministry(id.as_str()).is_some()
    }
}
