//! Tests for Directory::directorates_matching.

use netroster::console::directory::Directory;
use netroster_test_utils::prelude::*;

fn directory() -> Directory {
    Directory {
        deputy_ministries: vec![
            mock_deputy_ministry("1", "Finance"),
            mock_deputy_ministry("2", "Health"),
        ],
        directorates: vec![
            mock_directorate("10", "Budget", "1"),
            mock_directorate("11", "Audit", "1"),
            mock_directorate("20", "Budget Planning", "2"),
        ],
        employment_types: Vec::new(),
    }
}

fn ids(directory: &Directory, ministry: &str, term: &str, keep: &str) -> Vec<String> {
    directory
        .directorates_matching(ministry, term, keep)
        .into_iter()
        .map(|directorate| directorate.id.to_string())
        .collect()
}

/// Tests narrowing by a typed term across every ministry.
///
/// Expected: case-insensitive name matches only
#[test]
fn narrows_by_name() {
    assert_eq!(ids(&directory(), "", "bud", ""), vec!["10", "20"]);
}

/// Tests that the ministry restriction still applies.
///
/// Expected: only matches under the selected ministry
#[test]
fn respects_ministry() {
    assert_eq!(ids(&directory(), "1", "budget", ""), vec!["10"]);
}

/// Tests an empty term.
///
/// Expected: every directorate of the ministry
#[test]
fn empty_term_lists_all() {
    assert_eq!(ids(&directory(), "1", "", ""), vec!["10", "11"]);
}

/// Tests that the current selection is kept when it does not match.
///
/// Expected: "Audit" listed alongside the match
#[test]
fn keeps_selection() {
    assert_eq!(ids(&directory(), "1", "budget", "11"), vec!["10", "11"]);
}
