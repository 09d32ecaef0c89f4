//! Section grouping for composed entry lists.
//!
//! Sections appear in the order their label is first seen in the composed
//! list, never sorted. Entries keep their composed order inside a section.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::entry::Entry;

/// Entries of one section, in composed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionGroup<'a> {
    pub name: &'a str,
    pub entries: Vec<&'a Entry>,
}

/// Group `entries` by their `section` label in first-seen order.
pub fn group_by_section<'a>(entries: &[&'a Entry]) -> Vec<SectionGroup<'a>> {
    let mut groups: Vec<SectionGroup<'a>> = Vec::new();
    let mut position: FxHashMap<&'a str, usize> = FxHashMap::default();

    for &entry in entries {
        let name: &'a str = &entry.section;
        let slot = *position.entry(name).or_insert_with(|| {
            groups.push(SectionGroup { name, entries: Vec::new() });
            groups.len() - 1
        });
        groups[slot].entries.push(entry);
    }

    groups
}

/// Distinct section labels in first-seen order.
pub fn section_order<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
    let mut seen: FxHashSet<&'a str> = FxHashSet::default();
    let mut order = Vec::new();
    for &entry in entries {
        let name: &'a str = &entry.section;
        if seen.insert(name) {
            order.push(name);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(signature: &'static str, section: &'static str) -> Entry {
        Entry::new(signature, "", "O(1)", section, "")
    }

    #[test]
    fn test_first_seen_order_not_lexicographic() {
        let list = [entry("1", "X"), entry("2", "Y"), entry("3", "X"), entry("4", "Z")];
        let refs: Vec<&Entry> = list.iter().collect();

        let groups = group_by_section(&refs);
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);

        let x: Vec<&str> = groups[0].entries.iter().map(|e| &*e.signature).collect();
        assert_eq!(x, vec!["1", "3"]);
        assert_eq!(section_order(&refs), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_reverse_alphabetical_sections_stay_put() {
        let list = [entry("1", "Zeta"), entry("2", "Alpha")];
        let refs: Vec<&Entry> = list.iter().collect();
        assert_eq!(section_order(&refs), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(group_by_section(&[]).is_empty());
        assert!(section_order(&[]).is_empty());
    }
}
