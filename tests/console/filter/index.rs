//! Tests for UserIndex.
//!
//! The index must return exactly what the linear predicate returns.

use netroster::{
    console::{filter::UserFilter, index::UserIndex},
    model::{id::RecordId, user::UserStatus},
};
use netroster_test_utils::prelude::*;

/// Tests that indexed and linear filtering agree across selections.
///
/// Expected: identical results for every filter combination
#[test]
fn agrees_with_linear_filter() {
    let users = vec![
        mock_placed_user("1", "1", "10", UserStatus::Active),
        mock_placed_user("2", "1", "11", UserStatus::Deactive),
        mock_placed_user("3", "2", "20", UserStatus::Active),
        mock_placed_user("4", "2", "20", UserStatus::Deactive),
        mock_placed_user("5", "1", "10", UserStatus::Deactive),
    ];
    let index = UserIndex::build(&users);

    let filters = [
        UserFilter::default(),
        UserFilter::default().with_search("user"),
        UserFilter::default().with_deputy_ministry(&RecordId::from("1")),
        UserFilter::default().with_directorate(&RecordId::from("20")),
        UserFilter::default().with_status(Some(UserStatus::Deactive)),
        UserFilter::default()
            .with_deputy_ministry(&RecordId::from("1"))
            .with_status(Some(UserStatus::Deactive))
            .with_search("5"),
        UserFilter::default().with_deputy_ministry(&RecordId::from("9")),
    ];

    for filter in filters {
        assert_eq!(index.apply(&users, &filter), filter.apply(&users), "{:?}", filter);
    }
}

/// Tests that a selection only scans its smallest posting list.
///
/// Expected: candidates limited to the directorate's records
#[test]
fn narrows_candidates_to_smallest_dimension() {
    let users = vec![
        mock_placed_user("1", "1", "10", UserStatus::Active),
        mock_placed_user("2", "1", "11", UserStatus::Active),
        mock_placed_user("3", "1", "11", UserStatus::Active),
    ];
    let index = UserIndex::build(&users);

    let filter = UserFilter::default()
        .with_deputy_ministry(&RecordId::from("1"))
        .with_directorate(&RecordId::from("10"));

    assert_eq!(index.candidates(&filter), vec![0]);
    assert_eq!(index.len(), 3);
}
