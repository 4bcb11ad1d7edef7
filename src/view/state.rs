//! Selection and view state for a loaded build-time log.
//!
//! The view state owns the records, the current sort order and the current
//! selection. Every mutation goes through an explicit method that recomputes
//! the derived state (display order, selection statistics) before returning,
//! so a renderer never observes a half-updated view.

use super::interaction::PointerDelegate;
use super::reveal::{RevealTarget, Revealer};
use crate::aggregator::{bar_fraction, longest_duration, summarize, AggregateStats};
use crate::parser::BuildTimeRecord;
use crate::sort::{sort_indices, SortDescriptor};
use crate::utils::error::RevealError;
use log::{debug, info, warn};
use std::collections::BTreeSet;

/// Records, display order and selection of one build-time log
pub struct ViewState {
    /// Records in load order; never reordered, only replaced
    records: Vec<BuildTimeRecord>,

    /// Display position -> index into `records`
    display_order: Vec<usize>,

    sort_order: Vec<SortDescriptor>,

    /// Selected records, as indices into `records`
    selection: BTreeSet<usize>,

    /// Statistics of the current selection
    stats: AggregateStats,

    /// Record under the pointer, as an index into `records`
    hovered: Option<usize>,

    revealer: Box<dyn Revealer>,
}

impl ViewState {
    /// Create an empty view that reveals locations through `revealer`
    pub fn new(revealer: Box<dyn Revealer>) -> Self {
        Self {
            records: Vec::new(),
            display_order: Vec::new(),
            sort_order: Vec::new(),
            selection: BTreeSet::new(),
            stats: AggregateStats::default(),
            hovered: None,
            revealer,
        }
    }

    /// Replace the whole collection
    ///
    /// **Public** - called after a successful file load
    ///
    /// Clears the selection and hover, re-applies the current sort order to
    /// the new records, and returns the (empty) selection statistics.
    pub fn load(&mut self, records: Vec<BuildTimeRecord>) -> &AggregateStats {
        info!("Loading {} records into view", records.len());

        self.records = records;
        self.display_order = (0..self.records.len()).collect();
        self.selection.clear();
        self.hovered = None;
        sort_indices(&self.records, &mut self.display_order, &self.sort_order);

        self.recompute_stats()
    }

    /// Change the sort order and re-sort the rows
    ///
    /// **Public** - called when the user picks new sort columns
    ///
    /// Selection membership is unchanged; selected rows may move. An empty
    /// order restores load order.
    pub fn set_sort_order(&mut self, order: Vec<SortDescriptor>) {
        debug!("Sort order changed to {:?}", order);

        self.sort_order = order;
        self.display_order = (0..self.records.len()).collect();
        sort_indices(&self.records, &mut self.display_order, &self.sort_order);
    }

    /// Replace the selection with the given display rows
    ///
    /// **Public** - called when the user selects rows
    ///
    /// Rows past the end of the view are ignored.
    ///
    /// # Returns
    /// Statistics for the new selection
    pub fn set_selection<I>(&mut self, rows: I) -> &AggregateStats
    where
        I: IntoIterator<Item = usize>,
    {
        let mut selection = BTreeSet::new();
        for row in rows {
            match self.display_order.get(row) {
                Some(&index) => {
                    selection.insert(index);
                }
                None => warn!("Ignoring selection of row {} (view has {} rows)", row, self.len()),
            }
        }

        self.selection = selection;
        self.recompute_stats()
    }

    /// Select every row
    pub fn select_all(&mut self) -> &AggregateStats {
        self.selection = (0..self.records.len()).collect();
        self.recompute_stats()
    }

    pub fn clear_selection(&mut self) -> &AggregateStats {
        self.selection.clear();
        self.recompute_stats()
    }

    /// Statistics of the current selection
    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    pub fn sort_order(&self) -> &[SortDescriptor] {
        &self.sort_order
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a display position
    pub fn row(&self, row: usize) -> Option<&BuildTimeRecord> {
        self.display_order.get(row).map(|&index| &self.records[index])
    }

    /// All records in display order
    pub fn rows(&self) -> impl Iterator<Item = &BuildTimeRecord> + '_ {
        self.display_order.iter().map(move |&index| &self.records[index])
    }

    /// Display positions of the selected records, ascending
    pub fn selected_rows(&self) -> Vec<usize> {
        self.display_order
            .iter()
            .enumerate()
            .filter(|&(_, &index)| self.selection.contains(&index))
            .map(|(row, _)| row)
            .collect()
    }

    /// Selected records in display order
    pub fn selected_records(&self) -> Vec<&BuildTimeRecord> {
        self.display_order
            .iter()
            .filter(|&&index| self.selection.contains(&index))
            .map(|&index| &self.records[index])
            .collect()
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.display_order
            .get(row)
            .is_some_and(|index| self.selection.contains(index))
    }

    /// Histogram bar height of each row, in display order
    ///
    /// **Public** - relative to the longest record of the whole view
    pub fn bar_fractions(&self) -> Vec<f64> {
        let longest = longest_duration(&self.records).unwrap_or(0.0);
        self.rows()
            .map(|record| bar_fraction(record.duration_seconds(), longest))
            .collect()
    }

    /// Record currently under the pointer
    pub fn hovered(&self) -> Option<&BuildTimeRecord> {
        self.hovered.map(|index| &self.records[index])
    }

    /// Tooltip text for a row
    pub fn tooltip(&self, row: usize) -> Option<String> {
        self.row(row).map(|record| {
            format!(
                "{}\n{}:{}\n{:.3}s",
                record.function_name(),
                record.path(),
                record.line_number(),
                record.duration_seconds()
            )
        })
    }

    /// Reveal the source location of a display row
    ///
    /// **Public** - called on double click / activate
    ///
    /// # Errors
    /// * `RevealError::NoSuchRow` - Row is past the end of the view
    /// * Any error reported by the revealer
    pub fn reveal(&self, row: usize) -> Result<RevealTarget, RevealError> {
        let record = self.row(row).ok_or(RevealError::NoSuchRow {
            row,
            len: self.len(),
        })?;

        let target = RevealTarget::from(record);
        self.revealer.reveal(&target)?;
        Ok(target)
    }

    /// Reveal the source location of any record
    pub fn reveal_record(&self, record: &BuildTimeRecord) -> Result<(), RevealError> {
        self.revealer.reveal(&RevealTarget::from(record))
    }

    /// Recompute selection statistics
    ///
    /// **Private** - every selection or collection change ends here
    fn recompute_stats(&mut self) -> &AggregateStats {
        self.stats = summarize(self.selection.iter().map(|&index| &self.records[index]));
        &self.stats
    }
}

impl PointerDelegate for ViewState {
    fn on_double_activate(&mut self, row: usize) {
        if let Err(e) = self.reveal(row) {
            warn!("Reveal failed: {}", e);
        }
    }

    fn on_hover_enter(&mut self, row: usize) {
        self.hovered = self.display_order.get(row).copied();
    }

    fn on_hover_exit(&mut self, row: usize) {
        // Enter for the next row may arrive before exit for the previous one
        if self.display_order.get(row).copied() == self.hovered {
            self.hovered = None;
        }
    }
}
