//! # Browser State
//!
//! The whole session is one immutable [`BrowserState`] value. Every event
//! (load started, load settled, search submitted, page requested) is a pure
//! transition that returns the next state; nothing is mutated in place.
//!
//! ## Modes
//!
//! ```text
//!            on_search                on_search
//!   Browse ────────────▶ Searching ◀───────────┐
//!     ▲                      │                  │
//!     └──── on_clear_search ─┘──────────────────┘
//! ```
//!
//! The active dataset is chosen by mode alone: `Browse` reads the shuffled
//! display order, `Searching` reads the last filtered result, even when that
//! result is empty.
//!
//! ## Pages
//!
//! `current_page` only moves by one step through `on_next_page` and
//! `on_prev_page`, except where [`PagePolicy::ResetOnSearch`] sends it back to
//! the first page. With [`PagePolicy::Preserve`] a page index can outlive a
//! smaller result set; the paginator then yields an empty page.

use crate::model::{Mode, ProfileRecord, SearchQuery};
use crate::paginate::{self, PageState};
use crate::search::search;
use crate::shuffle::shuffle;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Number of placeholder cards a view asks for while sources are loading.
pub const LOADING_PLACEHOLDERS: usize = 5;

/// What happens to the current page when a new query is submitted or cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// Keep the page index across queries.
    Preserve,
    /// Go back to page 1 on every query change.
    #[default]
    ResetOnSearch,
}

#[derive(Debug, Clone)]
pub struct BrowserState {
    loading: bool,
    directory: Arc<[ProfileRecord]>,
    display_order: Arc<[ProfileRecord]>,
    filtered: Arc<[ProfileRecord]>,
    mode: Mode,
    query: Option<SearchQuery>,
    page: PageState,
    policy: PagePolicy,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(PagePolicy::default())
    }
}

impl BrowserState {
    pub fn new(policy: PagePolicy) -> Self {
        Self {
            loading: false,
            directory: Arc::from(Vec::new()),
            display_order: Arc::from(Vec::new()),
            filtered: Arc::from(Vec::new()),
            mode: Mode::Browse,
            query: None,
            page: PageState::default(),
            policy,
        }
    }

    // --- Transitions ---

    pub fn on_load_started(&self) -> Self {
        Self {
            loading: true,
            ..self.clone()
        }
    }

    /// Publishes a freshly aggregated directory and derives its display
    /// order. This is the only place the shuffle runs.
    pub fn on_loaded<R: Rng + ?Sized>(&self, directory: Vec<ProfileRecord>, rng: &mut R) -> Self {
        let display_order = shuffle(&directory, rng);
        Self {
            loading: false,
            directory: Arc::from(directory),
            display_order: Arc::from(display_order),
            ..self.clone()
        }
    }

    pub fn on_load_failed(&self) -> Self {
        Self {
            loading: false,
            directory: Arc::from(Vec::new()),
            display_order: Arc::from(Vec::new()),
            ..self.clone()
        }
    }

    /// Filters the display order, so matches keep the shuffled order the
    /// user was already browsing.
    pub fn on_search(&self, query: SearchQuery) -> Self {
        let filtered = search(&query, &self.display_order);
        Self {
            filtered: Arc::from(filtered),
            mode: Mode::Searching,
            query: Some(query),
            page: self.page_after_query_change(),
            ..self.clone()
        }
    }

    pub fn on_clear_search(&self) -> Self {
        Self {
            filtered: Arc::from(Vec::new()),
            mode: Mode::Browse,
            query: None,
            page: self.page_after_query_change(),
            ..self.clone()
        }
    }

    pub fn on_next_page(&self) -> Self {
        let current_page = paginate::next_page(self.page.current_page, self.total_pages());
        self.with_current_page(current_page)
    }

    pub fn on_prev_page(&self) -> Self {
        let current_page = paginate::prev_page(self.page.current_page);
        self.with_current_page(current_page)
    }

    fn with_current_page(&self, current_page: usize) -> Self {
        Self {
            page: PageState {
                current_page,
                ..self.page
            },
            ..self.clone()
        }
    }

    fn page_after_query_change(&self) -> PageState {
        match self.policy {
            PagePolicy::Preserve => self.page,
            PagePolicy::ResetOnSearch => PageState {
                current_page: 1,
                ..self.page
            },
        }
    }

    // --- Reads ---

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    pub fn directory(&self) -> &[ProfileRecord] {
        &self.directory
    }

    pub fn display_order(&self) -> &[ProfileRecord] {
        &self.display_order
    }

    pub fn filtered(&self) -> &[ProfileRecord] {
        &self.filtered
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size
    }

    pub fn active_dataset(&self) -> &[ProfileRecord] {
        match self.mode {
            Mode::Browse => &self.display_order,
            Mode::Searching => &self.filtered,
        }
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.active_dataset().len(), self.page.page_size)
    }

    pub fn current_records(&self) -> &[ProfileRecord] {
        paginate::page(
            self.active_dataset(),
            self.page.current_page,
            self.page.page_size,
        )
    }

    /// False only when a search is active and found nothing.
    pub fn has_results(&self) -> bool {
        !(self.mode == Mode::Searching && self.filtered.is_empty())
    }

    pub fn show_pagination(&self) -> bool {
        !self.directory.is_empty()
    }

    pub fn view(&self) -> PageView {
        let records = if self.loading || !self.has_results() {
            Vec::new()
        } else {
            self.current_records().to_vec()
        };
        PageView {
            loading: self.loading,
            placeholders: if self.loading { LOADING_PLACEHOLDERS } else { 0 },
            records,
            has_results: self.has_results(),
            current_page: self.page.current_page,
            total_pages: self.total_pages(),
            show_pagination: self.show_pagination(),
            mode: self.mode,
            query: self.query.clone(),
        }
    }
}

/// Snapshot of everything a presentation layer needs to draw one screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageView {
    pub loading: bool,
    pub placeholders: usize,
    pub records: Vec<ProfileRecord>,
    pub has_results: bool,
    pub current_page: usize,
    pub total_pages: usize,
    pub show_pagination: bool,
    pub mode: Mode,
    pub query: Option<SearchQuery>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profiles(n: usize) -> Vec<ProfileRecord> {
        (0..n)
            .map(|i| ProfileRecord::new(format!("Dev {:02}", i), "Remote"))
            .collect()
    }

    fn loaded(n: usize, policy: PagePolicy) -> BrowserState {
        let mut rng = StdRng::seed_from_u64(11);
        BrowserState::new(policy)
            .on_load_started()
            .on_loaded(profiles(n), &mut rng)
    }

    fn sorted_names(records: &[ProfileRecord]) -> Vec<String> {
        let mut names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_starts_in_browse_on_first_page() {
        let state = BrowserState::default();
        assert_eq!(state.mode(), Mode::Browse);
        assert_eq!(state.current_page(), 1);
        assert!(!state.loading());
        assert!(state.has_results());
        assert!(!state.show_pagination());
    }

    #[test]
    fn test_loading_view_asks_for_placeholders() {
        let state = BrowserState::default().on_load_started();
        let view = state.view();
        assert!(view.loading);
        assert_eq!(view.placeholders, LOADING_PLACEHOLDERS);
        assert!(view.records.is_empty());
    }

    #[test]
    fn test_loaded_display_order_is_a_permutation() {
        let state = loaded(45, PagePolicy::Preserve);
        assert!(!state.loading());
        assert_eq!(state.directory().len(), 45);
        assert_eq!(
            sorted_names(state.display_order()),
            sorted_names(state.directory())
        );
        assert_eq!(state.directory()[0].name, "Dev 00");
    }

    #[test]
    fn test_browse_pages_over_display_order() {
        let state = loaded(45, PagePolicy::Preserve);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.current_records(), &state.display_order()[0..20]);

        let last = state.on_next_page().on_next_page();
        assert_eq!(last.current_page(), 3);
        assert_eq!(last.current_records(), &state.display_order()[40..45]);

        let clamped = last.on_next_page();
        assert_eq!(clamped.current_page(), 3);
    }

    #[test]
    fn test_prev_page_stops_at_first() {
        let state = loaded(45, PagePolicy::Preserve);
        assert_eq!(state.on_prev_page().current_page(), 1);
        assert_eq!(state.on_next_page().on_prev_page().current_page(), 1);
    }

    #[test]
    fn test_transitions_leave_previous_state_alone() {
        let state = loaded(45, PagePolicy::Preserve);
        let _ = state.on_next_page();
        let _ = state.on_search(SearchQuery::new("dev 01", "name"));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.mode(), Mode::Browse);
    }

    #[test]
    fn test_search_switches_to_filtered_dataset() {
        let state = loaded(45, PagePolicy::Preserve).on_search(SearchQuery::new("dev 1", "name"));
        assert_eq!(state.mode(), Mode::Searching);
        assert_eq!(state.filtered().len(), 10);
        assert_eq!(state.active_dataset().len(), 10);
        assert_eq!(state.total_pages(), 1);
        assert!(state.has_results());
    }

    #[test]
    fn test_search_results_follow_display_order() {
        for seed in 0..5 {
            let state = BrowserState::new(PagePolicy::ResetOnSearch)
                .on_loaded(profiles(30), &mut StdRng::seed_from_u64(seed));

            let all = state.on_search(SearchQuery::new("dev", "name"));
            assert_eq!(all.filtered(), state.display_order());

            let some = state.on_search(SearchQuery::new("dev 1", "name"));
            let expected: Vec<ProfileRecord> = state
                .display_order()
                .iter()
                .filter(|r| r.name.starts_with("Dev 1"))
                .cloned()
                .collect();
            assert_eq!(some.filtered(), expected.as_slice());
        }
    }

    #[test]
    fn test_empty_search_result_still_searching() {
        let state = loaded(10, PagePolicy::Preserve).on_search(SearchQuery::new("zzznotfound", "name"));
        assert_eq!(state.mode(), Mode::Searching);
        assert!(!state.has_results());
        assert_eq!(state.total_pages(), 0);
        let view = state.view();
        assert!(!view.has_results);
        assert!(view.records.is_empty());
        assert!(view.show_pagination);
    }

    #[test]
    fn test_preserve_policy_keeps_page_past_the_end() {
        let state = loaded(45, PagePolicy::Preserve)
            .on_next_page()
            .on_next_page()
            .on_search(SearchQuery::new("dev 0", "name"));
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.total_pages(), 1);
        assert!(state.current_records().is_empty());
        assert!(state.has_results());
    }

    #[test]
    fn test_reset_policy_returns_to_first_page() {
        let state = loaded(45, PagePolicy::ResetOnSearch)
            .on_next_page()
            .on_next_page()
            .on_search(SearchQuery::new("dev 0", "name"));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.current_records().len(), 10);
    }

    #[test]
    fn test_next_page_uses_active_dataset_bounds() {
        let state = loaded(45, PagePolicy::ResetOnSearch).on_search(SearchQuery::new("dev 0", "name"));
        assert_eq!(state.on_next_page().current_page(), 1);
    }

    #[test]
    fn test_clear_search_goes_back_to_browse() {
        let state = loaded(45, PagePolicy::ResetOnSearch)
            .on_search(SearchQuery::new("zzz", "name"))
            .on_clear_search();
        assert_eq!(state.mode(), Mode::Browse);
        assert!(state.query().is_none());
        assert!(state.has_results());
        assert_eq!(state.active_dataset().len(), 45);
    }

    #[test]
    fn test_new_search_replaces_previous_query() {
        let state = loaded(45, PagePolicy::ResetOnSearch)
            .on_search(SearchQuery::new("dev 1", "name"))
            .on_search(SearchQuery::new("dev 44", "name"));
        assert_eq!(state.query(), Some(&SearchQuery::new("dev 44", "name")));
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn test_pages_do_not_reshuffle() {
        let state = loaded(45, PagePolicy::Preserve);
        let order = state.display_order().to_vec();
        let after = state
            .on_next_page()
            .on_search(SearchQuery::new("dev", "name"))
            .on_clear_search()
            .on_prev_page();
        assert_eq!(after.display_order(), order.as_slice());
    }

    #[test]
    fn test_failed_load_empties_everything() {
        let state = loaded(12, PagePolicy::Preserve).on_load_started().on_load_failed();
        assert!(!state.loading());
        assert!(state.directory().is_empty());
        assert!(state.display_order().is_empty());
        assert_eq!(state.total_pages(), 0);
        assert!(!state.show_pagination());
        assert!(state.view().records.is_empty());
    }
}
