//! Two-group tag filtering for the portfolio carousel.
//!
//! Filters come in two independent groups - what the studio did on a project
//! ("app": mixing, mastering, production...) and what kind of project it was
//! ("style": genres, formats). Selection is OR within a group and AND across
//! groups. Each group carries an `all` sentinel button in the UI; here `all`
//! is simply the empty selection, which makes the "a group never has zero
//! active buttons" invariant structural instead of enforced.

use crate::catalog::{Catalog, ProjectEntry};
use std::collections::BTreeSet;

/// The two filter button groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterGroup {
    App,
    Style,
}

/// Active selection of one group.
///
/// Values are the `data-filter` tokens of the buttons, not bare tags: a
/// single style button may bundle several comma-separated tags and matches
/// when any of them hits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupSelection {
    active: BTreeSet<String>,
}

impl GroupSelection {
    /// True when no specific value is selected, i.e. the `all` sentinel is
    /// the active button.
    pub fn is_all(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active.contains(value)
    }

    /// Flip one specific value. Selecting clears the `all` sentinel by
    /// construction; deselecting the last value falls back to it.
    pub fn toggle(&mut self, value: &str) {
        if !self.active.remove(value) {
            self.active.insert(value.to_string());
        }
    }

    /// Activate the `all` sentinel, dropping every specific value.
    pub fn select_all(&mut self) {
        self.active.clear();
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Vacuously true with nothing selected, otherwise true when any
    /// selected value shares a tag with the entry.
    fn matches(&self, entry: &ProjectEntry) -> bool {
        self.is_all()
            || self
                .active
                .iter()
                .flat_map(|value| value.split(','))
                .any(|tag| entry.has_tag(tag))
    }
}

/// One UI surface's complete filter state (desktop and mobile each own one).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub app: GroupSelection,
    pub style: GroupSelection,
}

impl FilterSelection {
    pub fn group(&self, group: FilterGroup) -> &GroupSelection {
        match group {
            FilterGroup::App => &self.app,
            FilterGroup::Style => &self.style,
        }
    }

    pub fn group_mut(&mut self, group: FilterGroup) -> &mut GroupSelection {
        match group {
            FilterGroup::App => &mut self.app,
            FilterGroup::Style => &mut self.style,
        }
    }

    /// AND across the two groups.
    pub fn matches(&self, entry: &ProjectEntry) -> bool {
        self.app.matches(entry) && self.style.matches(entry)
    }

    /// Back to both `all` sentinels.
    pub fn clear(&mut self) {
        self.app.select_all();
        self.style.select_all();
    }

    pub fn is_all(&self) -> bool {
        self.app.is_all() && self.style.is_all()
    }

    /// Number of specific values active across both groups (the count badge).
    pub fn active_count(&self) -> usize {
        self.app.len() + self.style.len()
    }

    /// Active values with their group, app group first (the pill list).
    pub fn active_values(&self) -> Vec<(FilterGroup, String)> {
        self.app
            .values()
            .map(|v| (FilterGroup::App, v.to_string()))
            .chain(
                self.style
                    .values()
                    .map(|v| (FilterGroup::Style, v.to_string())),
            )
            .collect()
    }
}

/// The visible subset for a selection, in original catalog order.
pub fn visible_entries<'a>(catalog: &'a Catalog, selection: &FilterSelection) -> Vec<&'a ProjectEntry> {
    catalog
        .all()
        .iter()
        .filter(|entry| selection.matches(entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryRecord;

    fn catalog() -> Catalog {
        let tags = [
            "mixing",
            "mixing mastering",
            "production",
            "production mixing",
            "mastering",
        ];
        Catalog::from_records(
            tags.iter()
                .enumerate()
                .map(|(i, tags)| EntryRecord {
                    title: Some(format!("Project {i}")),
                    tags: Some(tags.to_string()),
                    embed_url: Some(format!("url-{i}")),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_no_selection_matches_everything() {
        let catalog = catalog();
        let selection = FilterSelection::default();
        assert!(selection.is_all());
        assert_eq!(visible_entries(&catalog, &selection).len(), 5);
    }

    #[test]
    fn test_single_app_filter() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.app.toggle("mixing");
        let visible = visible_entries(&catalog, &selection);
        let titles: Vec<_> = visible.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Project 0", "Project 1", "Project 3"]);
    }

    #[test]
    fn test_and_across_groups_or_within_group() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.app.toggle("mixing");
        selection.app.toggle("mastering");
        // OR within the app group: anything tagged mixing or mastering.
        assert_eq!(visible_entries(&catalog, &selection).len(), 4);

        // AND with the style group: style selects a tag only one of those has.
        selection.style.toggle("production");
        let visible = visible_entries(&catalog, &selection);
        let titles: Vec<_> = visible.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Project 3"]);
    }

    #[test]
    fn test_comma_bundled_value_expands_to_tags() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.style.toggle("production,mastering");
        assert_eq!(visible_entries(&catalog, &selection).len(), 4);
    }

    #[test]
    fn test_zero_matches_is_reachable() {
        let catalog = catalog();
        let mut selection = FilterSelection::default();
        selection.app.toggle("podcast");
        assert!(visible_entries(&catalog, &selection).is_empty());
    }

    #[test]
    fn test_toggle_last_value_falls_back_to_all() {
        let mut group = GroupSelection::default();
        group.toggle("mixing");
        assert!(!group.is_all());
        group.toggle("mixing");
        assert!(group.is_all());
    }

    #[test]
    fn test_select_all_clears_specifics() {
        let mut group = GroupSelection::default();
        group.toggle("mixing");
        group.toggle("mastering");
        assert_eq!(group.len(), 2);
        group.select_all();
        assert!(group.is_all());
        assert!(!group.is_active("mixing"));
    }

    #[test]
    fn test_three_button_group_click_sequence() {
        // Simulates clicking through a 3-button group: all / mixing / mastering.
        let mut group = GroupSelection::default();
        assert!(group.is_all());

        group.toggle("mixing"); // click "mixing"
        group.toggle("mastering"); // click "mastering"
        assert!(!group.is_all());
        assert!(group.is_active("mixing") && group.is_active("mastering"));

        group.toggle("mixing"); // deselect "mixing"
        assert!(group.is_active("mastering"));
        assert!(!group.is_all());

        group.toggle("mastering"); // deselect the last specific button
        assert!(group.is_all());
    }

    #[test]
    fn test_round_trip_restores_original_order() {
        let mut catalog = catalog();
        catalog.mark_loaded("url-1");

        let mut selection = FilterSelection::default();
        selection.app.toggle("mastering");
        assert_eq!(visible_entries(&catalog, &selection).len(), 2);

        selection.clear();
        let visible = visible_entries(&catalog, &selection);
        let urls: Vec<_> = visible.iter().map(|e| e.embed_url.as_str()).collect();
        assert_eq!(urls, vec!["url-0", "url-1", "url-2", "url-3", "url-4"]);
        // Loaded flags survive the round trip.
        assert!(visible[1].is_loaded());
        assert!(!visible[0].is_loaded());
    }

    #[test]
    fn test_active_values_and_count() {
        let mut selection = FilterSelection::default();
        selection.style.toggle("edm");
        selection.app.toggle("mixing");
        assert_eq!(selection.active_count(), 2);
        assert_eq!(
            selection.active_values(),
            vec![
                (FilterGroup::App, "mixing".to_string()),
                (FilterGroup::Style, "edm".to_string()),
            ]
        );
    }
}
