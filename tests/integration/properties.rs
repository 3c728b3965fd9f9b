//! Property checks for search, pagination and export.

use proptest::prelude::*;
use roster::{filter_records, page_count, page_slice, EditorSettings, RosterEditor};

use super::common::determinism::{record, DeterministicIdGenerator};

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{1,6}", 0..20)
}

fn editor_with(names: &[String], page_size: usize) -> RosterEditor {
    let mut editor = RosterEditor::new(EditorSettings {
        page_size,
        ..EditorSettings::default()
    });
    for name in names {
        editor.add_values(name, "female", "20").unwrap();
    }
    editor
}

proptest! {
    #[test]
    fn filter_keeps_matching_records_in_order(names in names(), term in "[a-zA-Z]{0,3}") {
        let gen = DeterministicIdGenerator::new();
        let records: Vec<_> = names.iter().map(|n| record(&gen, n, "male", 30)).collect();

        let filtered = filter_records(&records, &term);
        let expected: Vec<_> = records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&term.to_lowercase()))
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn pages_partition_the_items(len in 0usize..40, size in 1usize..8) {
        let items: Vec<usize> = (0..len).collect();
        let pages = page_count(len, size);
        prop_assert_eq!(pages, len.div_ceil(size));

        let joined: Vec<usize> = (1..=pages)
            .flat_map(|p| page_slice(&items, p, size).iter().copied())
            .collect();
        prop_assert_eq!(joined, items);
        prop_assert!(page_slice(&(0..len).collect::<Vec<_>>(), pages + 1, size).is_empty());
    }

    #[test]
    fn search_always_returns_to_first_page(names in names(), term in "[a-z]{0,2}", size in 1usize..4) {
        let mut editor = editor_with(&names, size);
        while editor.next_page() {}
        editor.set_search_term(term);
        prop_assert_eq!(editor.current_page(), 1);
    }

    #[test]
    fn delete_keeps_current_page_in_range(
        names in prop::collection::vec("[a-z]{1,4}", 1..15),
        size in 1usize..4,
        pick in any::<prop::sample::Index>(),
        forward in 0usize..5,
    ) {
        let mut editor = editor_with(&names, size);
        for _ in 0..forward {
            editor.next_page();
        }
        let id = editor.records()[pick.index(names.len())].id;
        editor.delete(id).unwrap();

        let current = editor.current_page();
        prop_assert!(current >= 1);
        prop_assert!(current <= editor.page_count().max(1));
        prop_assert_eq!(editor.len(), names.len() - 1);
    }

    #[test]
    fn export_covers_whole_roster(names in names(), term in "[a-z]{0,2}") {
        let mut editor = editor_with(&names, 3);
        editor.set_search_term(term);

        let mut out = Vec::new();
        let rows = editor.export_csv(&mut out).unwrap();
        prop_assert_eq!(rows, names.len());

        let text = String::from_utf8(out).unwrap();
        prop_assert_eq!(text.lines().count(), names.len() + 1);
    }
}
