//! Tests for the generic search over other listings.

use netroster::{
    console::{directory::Directory, filter::search},
    model::user::InternetUser,
};
use netroster_test_utils::prelude::*;

/// Tests the violation screen's username-only search.
///
/// Expected: names are not searched
#[test]
fn username_only_search() {
    let users = vec![
        mock_internet_user("1", "Ali", "ali01", "555"),
        mock_internet_user("2", "Alia", "zee1", "777"),
    ];

    let hits = search(&users, "AL", |user: &InternetUser| [user.username.clone()]);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "1");
}

/// Tests that directorates match on their parent ministry's name.
///
/// Expected: searching a ministry name returns its directorates
#[test]
fn directorate_search_matches_parent_ministry() {
    let directory = Directory {
        deputy_ministries: vec![
            mock_deputy_ministry("1", "Finance"),
            mock_deputy_ministry("2", "Health"),
        ],
        directorates: vec![
            mock_directorate("10", "Budget", "1"),
            mock_directorate("20", "Hospitals", "2"),
            mock_directorate("21", "Finance Office", "2"),
        ],
        employment_types: Vec::new(),
    };

    let hits = search(&directory.directorates, "finance", |directorate| {
        directory.directorate_search_fields(directorate)
    });

    let names: Vec<&str> = hits.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Budget", "Finance Office"]);
}
