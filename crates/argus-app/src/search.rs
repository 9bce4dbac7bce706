// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::SectionRecords;

/// One search hit against the cached page. Carries the record's index
/// so overlay activation never re-matches by display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub index: usize,
    pub label: String,
    pub opens_overlay: bool,
}

/// Case-insensitive substring filter over the cached records of one
/// section. Matches the `name` field where the record has one, the
/// `application` field otherwise; records with neither never match.
/// A blank or whitespace-only query is "no filter": no matches, panel
/// hidden, full page left on screen.
pub fn search_matches(records: &SectionRecords, query: &str) -> Vec<SearchMatch> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let opens_overlay = records.section().policy().overlay.is_some();
    (0..records.len())
        .filter_map(|index| {
            let field = records.search_field(index)?;
            if field.to_lowercase().contains(&needle) {
                Some(SearchMatch {
                    index,
                    label: field.to_owned(),
                    opens_overlay,
                })
            } else {
                None
            }
        })
        .collect()
}

/// The results panel shows only for a non-blank query with hits.
pub fn panel_visible(query: &str, matches: &[SearchMatch]) -> bool {
    !query.trim().is_empty() && !matches.is_empty()
}

#[cfg(test)]
mod tests {
    use super::{panel_visible, search_matches};
    use crate::model::{Contact, KeylogEntry, MessageThread, SectionRecords};

    fn contacts(names: &[&str]) -> SectionRecords {
        SectionRecords::Contacts(
            names
                .iter()
                .map(|name| Contact {
                    name: (*name).to_owned(),
                    ..Contact::default()
                })
                .collect(),
        )
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let records = contacts(&["Alice Harper", "Bob", "alicia"]);
        let matches = search_matches(&records, "ali");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[0].label, "Alice Harper");
        assert_eq!(matches[1].index, 2);

        let matches = search_matches(&records, "ALICE");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn every_match_contains_the_query() {
        let records = contacts(&["Alice", "Malik", "Bob", "Salma"]);
        for hit in search_matches(&records, "al") {
            assert!(hit.label.to_lowercase().contains("al"));
        }
    }

    #[test]
    fn blank_and_whitespace_queries_hide_the_panel() {
        let records = contacts(&["Alice"]);
        for query in ["", "   ", "\t"] {
            let matches = search_matches(&records, query);
            assert!(matches.is_empty());
            assert!(!panel_visible(query, &matches));
        }
    }

    #[test]
    fn zero_hit_query_hides_the_panel() {
        let records = contacts(&["Alice"]);
        let matches = search_matches(&records, "zzz");
        assert!(matches.is_empty());
        assert!(!panel_visible("zzz", &matches));
    }

    #[test]
    fn keylogs_match_on_application_without_overlay() {
        let records = SectionRecords::Keylogs(vec![
            KeylogEntry {
                application: "Mail".to_owned(),
                ..KeylogEntry::default()
            },
            KeylogEntry {
                application: "Browser".to_owned(),
                ..KeylogEntry::default()
            },
        ]);
        let matches = search_matches(&records, "mai");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].label, "Mail");
        assert!(!matches[0].opens_overlay);
    }

    #[test]
    fn thread_sections_mark_matches_as_overlay_openers() {
        let records = SectionRecords::Messages(vec![MessageThread {
            name: "Alice".to_owned(),
            ..MessageThread::default()
        }]);
        let matches = search_matches(&records, "ali");
        assert!(matches[0].opens_overlay);
        assert!(panel_visible("ali", &matches));
    }

    #[test]
    fn duplicate_names_keep_distinct_indices() {
        let records = contacts(&["Alice", "Alice"]);
        let matches = search_matches(&records, "alice");
        assert_eq!(matches.len(), 2);
        assert_ne!(matches[0].index, matches[1].index);
    }
}
