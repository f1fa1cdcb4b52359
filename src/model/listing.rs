//! Filterable font listing and checkbox state
//!
//! `FontListing` owns the loaded records, the current filter text, the
//! visible subset it produces, and the set of selected font ids. Every
//! mutation recomputes what depends on it, so callers never see a stale
//! visible list.

use crate::model::font::FontRecord;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct FontListing {
    records: Vec<FontRecord>,
    filter: String,
    /// Indices into `records`, in document order
    visible: Vec<usize>,
    /// Selected font ids; only ever contains visible ids
    selected: HashSet<String>,
}

impl FontListing {
    pub fn new(records: Vec<FontRecord>) -> Self {
        let mut listing = Self {
            records,
            ..Default::default()
        };
        listing.recompute_visible();
        listing
    }

    /// Replace the loaded records, keeping the filter text
    pub fn set_records(&mut self, records: Vec<FontRecord>) {
        self.records = records;
        self.selected.clear();
        self.recompute_visible();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filter
    // ─────────────────────────────────────────────────────────────────────────

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Set the filter text and recompute the visible subset.
    ///
    /// All checkbox state is discarded on every change.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        self.selected.clear();
        self.recompute_visible();
    }

    pub fn push_filter_char(&mut self, c: char) {
        let mut text = self.filter.clone();
        text.push(c);
        self.set_filter(&text);
    }

    pub fn pop_filter_char(&mut self) {
        let mut text = self.filter.clone();
        if text.pop().is_some() {
            self.set_filter(&text);
        }
    }

    fn recompute_visible(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, font)| font.name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn total_len(&self) -> usize {
        self.records.len()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible(&self) -> impl Iterator<Item = &FontRecord> {
        self.visible.iter().map(|&i| &self.records[i])
    }

    pub fn visible_at(&self, index: usize) -> Option<&FontRecord> {
        self.visible.get(index).map(|&i| &self.records[i])
    }

    fn is_visible_id(&self, id: &str) -> bool {
        self.visible().any(|font| font.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Records flagged for export, in document order.
    ///
    /// Records sharing a selected id are all returned.
    pub fn selected_records(&self) -> Vec<&FontRecord> {
        self.records
            .iter()
            .filter(|font| self.selected.contains(&font.id))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Select every visible record; hidden records are untouched
    pub fn select_all(&mut self) {
        let ids: Vec<String> = self.visible().map(|font| font.id.clone()).collect();
        self.selected.extend(ids);
    }

    /// Deselect every visible record
    pub fn deselect_all(&mut self) {
        let ids: Vec<String> = self.visible().map(|font| font.id.clone()).collect();
        for id in ids {
            self.selected.remove(&id);
        }
    }

    /// Flip one record's flag. Returns the new state, or `None` if the id
    /// is not currently visible.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        if !self.is_visible_id(id) {
            return None;
        }
        if self.selected.remove(id) {
            Some(false)
        } else {
            self.selected.insert(id.to_string());
            Some(true)
        }
    }

    pub fn toggle_at(&mut self, index: usize) -> Option<bool> {
        let id = self.visible_at(index)?.id.clone();
        self.toggle(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_listing() -> FontListing {
        FontListing::new(vec![
            FontRecord::new("1", "Source Sans", "Regular"),
            FontRecord::new("2", "Source Serif", "Bold"),
            FontRecord::new("3", "Minion Pro", "Italic"),
            FontRecord::new("4", "Myriad", "Light"),
        ])
    }

    fn visible_ids(listing: &FontListing) -> Vec<&str> {
        listing.visible().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_shows_all() {
        let listing = sample_listing();
        assert_eq!(listing.visible_len(), 4);
        assert_eq!(visible_ids(&listing), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut listing = sample_listing();
        listing.set_filter("SOURCE");
        assert_eq!(visible_ids(&listing), vec!["1", "2"]);

        listing.set_filter("ri");
        assert_eq!(visible_ids(&listing), vec!["2", "4"]);

        listing.set_filter("nothing matches");
        assert_eq!(listing.visible_len(), 0);
    }

    #[test]
    fn test_filter_matches_name_not_weight() {
        let mut listing = sample_listing();
        listing.set_filter("bold");
        assert_eq!(listing.visible_len(), 0);
    }

    #[test]
    fn test_filter_change_resets_selection() {
        let mut listing = sample_listing();
        listing.select_all();
        assert_eq!(listing.selected_count(), 4);

        listing.set_filter("source");
        assert_eq!(listing.selected_count(), 0);

        listing.toggle("1");
        listing.push_filter_char(' ');
        assert!(!listing.is_selected("1"));
    }

    #[test]
    fn test_pop_on_empty_filter_keeps_selection() {
        let mut listing = sample_listing();
        listing.toggle("3");
        listing.pop_filter_char();
        assert!(listing.is_selected("3"));
    }

    #[test]
    fn test_select_all_only_touches_visible() {
        let mut listing = sample_listing();
        listing.set_filter("source");
        listing.select_all();

        let selected: Vec<&str> = listing
            .selected_records()
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(selected, vec!["1", "2"]);
        assert!(!listing.is_selected("3"));
    }

    #[test]
    fn test_deselect_all() {
        let mut listing = sample_listing();
        listing.select_all();
        listing.deselect_all();
        assert_eq!(listing.selected_count(), 0);
        assert!(listing.selected_records().is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut listing = sample_listing();
        assert_eq!(listing.toggle("2"), Some(true));
        assert!(listing.is_selected("2"));
        assert_eq!(listing.toggle("2"), Some(false));
        assert!(!listing.is_selected("2"));
    }

    #[test]
    fn test_toggle_hidden_id_is_ignored() {
        let mut listing = sample_listing();
        listing.set_filter("myriad");
        assert_eq!(listing.toggle("1"), None);
        assert_eq!(listing.selected_count(), 0);
    }

    #[test]
    fn test_toggle_at_uses_visible_index() {
        let mut listing = sample_listing();
        listing.set_filter("source");
        assert_eq!(listing.toggle_at(1), Some(true));
        assert!(listing.is_selected("2"));
        assert_eq!(listing.toggle_at(5), None);
    }

    #[test]
    fn test_duplicate_ids_share_a_flag() {
        let mut listing = FontListing::new(vec![
            FontRecord::new("7", "Dup", "Regular"),
            FontRecord::new("7", "Dup", "Regular"),
        ]);
        listing.toggle("7");
        assert_eq!(listing.selected_records().len(), 2);
    }

    #[test]
    fn test_set_records_keeps_filter() {
        let mut listing = sample_listing();
        listing.set_filter("minion");
        listing.toggle("3");

        listing.set_records(vec![
            FontRecord::new("9", "Minion Variable", "Regular"),
            FontRecord::new("10", "Futura", "Medium"),
        ]);
        assert_eq!(listing.filter(), "minion");
        assert_eq!(visible_ids(&listing), vec!["9"]);
        assert_eq!(listing.selected_count(), 0);
        assert_eq!(listing.total_len(), 2);
    }
}
