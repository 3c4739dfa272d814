//! Indexed lookup for the internet-user listing.
//!
//! [`UserIndex`] maps each equality dimension to the positions of the records that
//! carry a value, so a selection only scans its smallest posting list instead of the
//! whole collection. Build it when the collection changes, not on each keystroke.

use std::collections::HashMap;

use crate::{
    console::filter::{UserFilter, ALL},
    model::user::{InternetUser, UserStatus},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserIndex {
    len: usize,
    by_deputy_ministry: HashMap<String, Vec<usize>>,
    by_directorate: HashMap<String, Vec<usize>>,
    by_status: HashMap<UserStatus, Vec<usize>>,
}

impl UserIndex {
    pub fn build(users: &[InternetUser]) -> Self {
        let mut index = Self {
            len: users.len(),
            ..Default::default()
        };

        for (position, user) in users.iter().enumerate() {
            index
                .by_deputy_ministry
                .entry(user.deputy_ministry.clone())
                .or_default()
                .push(position);
            index
                .by_directorate
                .entry(user.directorate.clone())
                .or_default()
                .push(position);
            index.by_status.entry(user.status).or_default().push(position);
        }

        index
    }

    /// Number of records the index was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Positions worth checking against `filter`, in collection order.
    ///
    /// Without a selection every position is a candidate.
    pub fn candidates(&self, filter: &UserFilter) -> Vec<usize> {
        const NONE: &[usize] = &[];

        let mut lists: Vec<&[usize]> = Vec::new();
        if filter.deputy_ministry != ALL {
            lists.push(
                self.by_deputy_ministry
                    .get(&filter.deputy_ministry)
                    .map_or(NONE, Vec::as_slice),
            );
        }
        if filter.directorate != ALL {
            lists.push(
                self.by_directorate
                    .get(&filter.directorate)
                    .map_or(NONE, Vec::as_slice),
            );
        }
        if let Some(status) = filter.status {
            lists.push(self.by_status.get(&status).map_or(NONE, Vec::as_slice));
        }

        match lists.into_iter().min_by_key(|list| list.len()) {
            Some(smallest) => smallest.to_vec(),
            None => (0..self.len).collect(),
        }
    }

    /// Same result as [`UserFilter::apply`], scanning only candidate positions.
    ///
    /// `users` must be the collection the index was built from.
    pub fn apply<'a>(&self, users: &'a [InternetUser], filter: &UserFilter) -> Vec<&'a InternetUser> {
        self.candidates(filter)
            .into_iter()
            .filter_map(|position| users.get(position))
            .filter(|user| filter.matches(user))
            .collect()
    }
}
