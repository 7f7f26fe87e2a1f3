//! Stateful filtering + pagination over a fixed catalog.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::pager::Pager;
use crate::predicates::{matches_advanced, matches_category, matches_text, rule_for};
use crate::{AdvancedFilterState, Category, FilterQuery, JobPosting};

/// Number of catalog postings matching a category rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Holds the current query and page and keeps the derived result set in sync.
///
/// Every query mutator recomputes `filtered_jobs` from the full catalog and
/// puts the cursor back on page 1. `set_current_page` only moves the cursor.
#[derive(Debug, Clone)]
pub struct JobFilterEngine {
    catalog: Arc<[JobPosting]>,
    pager: Pager,
    query: FilterQuery,
    filtered: Vec<JobPosting>,
    current_page: usize,
}

impl JobFilterEngine {
    pub fn new(catalog: impl Into<Arc<[JobPosting]>>, page_size: usize) -> Self {
        let mut engine = Self {
            catalog: catalog.into(),
            pager: Pager::new(page_size),
            query: FilterQuery::default(),
            filtered: Vec::new(),
            current_page: 1,
        };
        engine.recompute();
        engine
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.recompute();
    }

    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.query.selected_category = category.into();
        self.recompute();
    }

    /// Replaces the whole advanced-filter snapshot.
    pub fn set_active_filters(&mut self, filters: AdvancedFilterState) {
        self.query.advanced_filters = filters;
        self.recompute();
    }

    /// Replaces all three dimensions at once with a single recomputation.
    pub fn apply(&mut self, query: FilterQuery) {
        self.query = query;
        self.recompute();
    }

    pub fn set_current_page(&mut self, page: i64) {
        self.current_page = self.pager.clamp(page, self.total_pages());
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.pager.previous(self.current_page);
    }

    pub fn next_page(&mut self) {
        self.current_page = self.pager.next(self.current_page, self.total_pages());
    }

    pub fn catalog(&self) -> &[JobPosting] {
        &self.catalog
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    pub fn selected_category(&self) -> &str {
        &self.query.selected_category
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    pub fn filtered_jobs(&self) -> &[JobPosting] {
        &self.filtered
    }

    pub fn current_jobs(&self) -> &[JobPosting] {
        self.pager.slice(&self.filtered, self.current_page)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered.len())
    }

    pub fn result_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_results(&self) -> bool {
        !self.filtered.is_empty()
    }

    pub fn needs_pagination(&self) -> bool {
        self.pager.is_needed(self.filtered.len())
    }

    /// Listing title: "<category> Jobs" while a category is selected.
    pub fn heading(&self) -> String {
        if self.query.selected_category.is_empty() {
            "Recommended Jobs".to_string()
        } else {
            format!("{} Jobs", self.query.selected_category)
        }
    }

    /// Per-category match counts over the whole catalog, for the category chips.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let rule = rule_for(category);
                CategoryCount {
                    category,
                    count: self.catalog.iter().filter(|job| rule.matches(job)).count(),
                }
            })
            .collect()
    }

    fn recompute(&mut self) {
        let query = &self.query;
        self.filtered = self
            .catalog
            .iter()
            .filter(|job| matches_text(job, &query.search_term))
            .filter(|job| matches_category(job, &query.selected_category))
            .filter(|job| matches_advanced(job, &query.advanced_filters))
            .cloned()
            .collect();
        self.current_page = 1;
        debug!(
            search_term = %query.search_term,
            category = %query.selected_category,
            matched = self.filtered.len(),
            catalog = self.catalog.len(),
            "recomputed job filter"
        );
    }
}
