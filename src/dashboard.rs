//! Current dataset, search and view, with the derived rollups.
//!
//! Every change (new files, new search text) recomputes the filtered set,
//! the three rollups and the metrics from scratch. Switching views only
//! changes which rollup is displayed.

use crate::aggregate::metrics::{Metrics, summarize};
use crate::aggregate::{Aggregates, aggregate};
use crate::dataset::{Dataset, Record};
use crate::export::report::export_report;
use crate::filter::search::{SearchQuery, append_search_term, filter_records};
use crate::resolve::fields::{FieldKeys, resolve_fields};
use crate::view::ViewMode;

/// Derived state for one (record set, search) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub matched_rows: usize,
    pub aggregates: Aggregates,
    pub metrics: Metrics,
}

/// Filter, aggregate and summarize in one go.
pub fn compute_snapshot(records: &[Record], keys: &FieldKeys, query: &SearchQuery) -> Snapshot {
    let filtered = filter_records(records, keys, query);
    let aggregates = aggregate(filtered.iter().copied(), keys);
    let metrics = summarize(filtered.iter().copied(), keys);
    tracing::debug!(
        tokens = query.tokens().len(),
        matched = filtered.len(),
        total = records.len(),
        "recomputed snapshot"
    );
    Snapshot {
        matched_rows: filtered.len(),
        aggregates,
        metrics,
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    keys: FieldKeys,
    view: ViewMode,
    search: String,
    snapshot: Snapshot,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> Self {
        let keys = resolve_fields(dataset.headers());
        let snapshot = compute_snapshot(dataset.records(), &keys, &SearchQuery::default());
        Self {
            dataset,
            keys,
            view: ViewMode::default(),
            search: String::new(),
            snapshot,
        }
    }

    /// Replace the dataset; the search is cleared, the view kept.
    pub fn load(&mut self, dataset: Dataset) {
        let view = self.view;
        *self = Self::new(dataset);
        self.view = view;
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.recompute();
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Switch to `view` and narrow the search by `term`.
    pub fn drill_into(&mut self, view: ViewMode, term: &str) {
        self.view = view;
        let next = append_search_term(&self.search, term);
        if next != self.search {
            self.set_search(&next);
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn keys(&self) -> &FieldKeys {
        &self.keys
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// CSV report for the current view.
    pub fn export(&self) -> String {
        export_report(
            self.view,
            &self.snapshot.aggregates,
            &self.snapshot.metrics,
        )
    }

    fn recompute(&mut self) {
        let query = SearchQuery::parse(&self.search);
        self.snapshot = compute_snapshot(self.dataset.records(), &self.keys, &query);
    }
}
