use super::column::Column;
use super::filter::{ActiveFilters, FilterDescriptor};
use super::sort::{sort_rows, SortDirection, SortState};
use crate::model::Row;
use crate::utils::datetime;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Rows per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Declarative description of one table
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub columns: Vec<Column>,
    pub filters: Vec<FilterDescriptor>,
    /// Field matched by free-text search
    pub search_key: String,
    pub page_size: usize,
}

impl TableConfig {
    pub fn new(columns: Vec<Column>, search_key: &str) -> Self {
        Self {
            columns,
            filters: Vec::new(),
            search_key: search_key.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub fn with_filters(mut self, filters: Vec<FilterDescriptor>) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

/// Position of the visible slice within the filtered rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Zero-based page index
    pub page: usize,
    pub page_count: usize,
    /// One-based index of the first row on the page, 0 when empty
    pub first: usize,
    /// One-based index of the last row on the page
    pub last: usize,
    pub total: usize,
}

/// Searchable, filterable, sortable, selectable, paginated view over rows.
///
/// The view never mutates its rows; search, filter, sort, selection and the
/// page index are local state. Date buckets are evaluated against the clock
/// on every call.
#[derive(Debug, Clone)]
pub struct TableView<R> {
    rows: Arc<[R]>,
    config: TableConfig,
    query: String,
    filters: ActiveFilters,
    sort: Option<SortState>,
    selected: BTreeSet<String>,
    page: usize,
    clock: fn() -> NaiveDate,
}

impl<R: Row> TableView<R> {
    pub fn new(rows: impl Into<Arc<[R]>>, config: TableConfig) -> Self {
        Self {
            rows: rows.into(),
            config,
            query: String::new(),
            filters: ActiveFilters::default(),
            sort: None,
            selected: BTreeSet::new(),
            page: 0,
            clock: datetime::today,
        }
    }

    /// Replace the source of "today" used by date filters
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.config.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Replace the rows wholesale. Selection of vanished ids is dropped and
    /// the page index is clamped.
    pub fn set_rows(&mut self, rows: impl Into<Arc<[R]>>) {
        self.rows = rows.into();
        let ids: BTreeSet<&str> = self.rows.iter().map(Row::id).collect();
        self.selected.retain(|id| ids.contains(id.as_str()));
        self.page = self.page.min(self.page_count().saturating_sub(1));
    }

    // Search

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.page = 0;
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.page = 0;
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    fn matches_query(&self, row: &R) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        row.field(&self.config.search_key)
            .is_some_and(|value| value.to_string().to_lowercase().contains(&needle))
    }

    // Filters

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    pub fn filter_descriptors(&self) -> &[FilterDescriptor] {
        &self.config.filters
    }

    /// Toggle one option of a filter; returns whether it is now active
    pub fn toggle_filter(&mut self, key: &str, value: &str) -> bool {
        self.page = 0;
        self.filters.toggle(key, value)
    }

    pub fn clear_filter(&mut self, key: &str) {
        self.filters.clear_key(key);
        self.page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 0;
    }

    // Sorting

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Toggle sorting on a sortable column: a new column starts ascending,
    /// the current column flips direction. Returns the new direction, or
    /// `None` when the column is unknown or not sortable.
    pub fn toggle_sort(&mut self, key: &str) -> Option<SortDirection> {
        let sortable = self.config.columns.iter().any(|c| c.key == key && c.sortable);
        if !sortable {
            return None;
        }

        let direction = match &self.sort {
            Some(state) if state.key == key => state.direction.flipped(),
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortState {
            key: key.to_string(),
            direction,
        });
        Some(direction)
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    // Visible rows

    /// Rows passing search and filters, in sort order, across all pages
    pub fn visible_rows(&self) -> Vec<&R> {
        self.visible_rows_at((self.clock)())
    }

    pub fn visible_rows_at(&self, today: NaiveDate) -> Vec<&R> {
        let mut rows: Vec<&R> = self
            .rows
            .iter()
            .filter(|row| self.matches_query(row))
            .filter(|row| self.filters.matches(*row, &self.config.filters, today))
            .collect();

        if let Some(state) = &self.sort {
            sort_rows(&mut rows, state);
        }
        rows
    }

    // Pagination

    pub fn page_size(&self) -> usize {
        self.config.page_size.max(1)
    }

    pub fn page_count(&self) -> usize {
        self.visible_rows().len().div_ceil(self.page_size()).max(1)
    }

    /// Current page index, clamped to the filtered row count
    pub fn page(&self) -> usize {
        self.page.min(self.page_count() - 1)
    }

    pub fn page_rows(&self) -> Vec<&R> {
        self.page_rows_at((self.clock)())
    }

    pub fn page_rows_at(&self, today: NaiveDate) -> Vec<&R> {
        let visible = self.visible_rows_at(today);
        let size = self.page_size();
        let page_count = visible.len().div_ceil(size).max(1);
        let page = self.page.min(page_count - 1);
        visible.into_iter().skip(page * size).take(size).collect()
    }

    pub fn page_info(&self) -> PageInfo {
        let total = self.visible_rows().len();
        let page = self.page();
        let size = self.page_size();
        let first = if total == 0 { 0 } else { page * size + 1 };
        PageInfo {
            page,
            page_count: self.page_count(),
            first,
            last: (page * size + size).min(total),
            total,
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    pub fn next_page(&mut self) -> bool {
        let before = self.page();
        self.go_to_page(before + 1);
        self.page != before
    }

    pub fn prev_page(&mut self) -> bool {
        let before = self.page();
        self.go_to_page(before.saturating_sub(1));
        self.page != before
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    pub fn last_page(&mut self) {
        self.page = self.page_count() - 1;
    }

    // Selection

    /// Toggle a row's checkbox; returns whether it is now selected
    pub fn toggle_selected(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Select every row on the current page, or clear them all when they
    /// are already selected.
    pub fn select_page(&mut self) {
        let ids: Vec<String> = self.page_rows().iter().map(|row| row.id().to_string()).collect();
        if !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id)) {
            for id in &ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(ids);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
