//! Tests for Directory::load.

use netroster::console::directory::Directory;
use netroster_test_utils::prelude::*;

fn seeded() -> TestBuilder {
    TestBuilder::new()
        .with_deputy_ministries(vec![mock_deputy_ministry("1", "Finance")])
        .with_directorates(vec![
            mock_directorate("10", "Budget", "1"),
            mock_directorate("20", "Hospitals", "2"),
        ])
        .with_employment_types(vec![
            mock_employment_type("1", "Permanent"),
            mock_employment_type("2", "Contract"),
        ])
}

/// Tests that all three lookups are fetched.
///
/// Expected: every table filled, three GET requests
#[tokio::test]
async fn fetches_all_lookups() {
    let backend = seeded().build();

    let directory = Directory::load(&backend).await;

    assert_eq!(directory.deputy_ministries.len(), 1);
    assert_eq!(directory.directorates.len(), 2);
    assert_eq!(directory.employment_type_labels(), vec!["Permanent", "Contract"]);
    assert_eq!(backend.requests_with(Method::Get).len(), 3);
}

/// Tests that a failing lookup only empties its own table.
///
/// Expected: directorates empty, other tables filled
#[tokio::test]
async fn failed_lookup_leaves_table_empty() {
    let backend = seeded()
        .failing(Method::Get, "directorates", server_error())
        .build();

    let directory = Directory::load(&backend).await;

    assert!(directory.directorates.is_empty());
    assert_eq!(directory.deputy_ministries.len(), 1);
    assert_eq!(directory.employment_types.len(), 2);
}

/// Tests cascading directorate options.
///
/// Expected: only directorates of the selected ministry, all when none selected
#[tokio::test]
async fn directorates_follow_selected_ministry() {
    let backend = seeded().build();
    let directory = Directory::load(&backend).await;

    let names = |ministry: &str| {
        directory
            .directorates_in(ministry)
            .iter()
            .map(|d| d.name.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(names("1"), vec!["Budget"]);
    assert_eq!(names(""), vec!["Budget", "Hospitals"]);
    assert_eq!(directory.deputy_ministry_name("1"), "Finance");
    assert_eq!(directory.deputy_ministry_name("Legacy"), "Legacy");
}
