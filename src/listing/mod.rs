//! Search, filter and paginate over an in-memory record collection.
//!
//! Every list screen (users, bets, ledger, account history) is a `Listing`
//! over its own record type. Fetched screens wrap it in a `RemoteListing`
//! which also tracks the state of the single outstanding request.

use std::ops::RangeInclusive;

/// Number of page buttons shown around the current page.
pub const PAGE_WINDOW: usize = 5;

/// A record that can be matched against a search term.
pub trait Searchable {
    /// Tab-style grouping. Records without tabs use `()`.
    type Category: Copy + PartialEq + Default + std::fmt::Debug;

    /// Fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn in_category(&self, _category: Self::Category) -> bool {
        true
    }

    /// Case-insensitive substring match over the designated fields.
    fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone)]
pub struct Listing<R: Searchable> {
    records: Vec<R>,
    search_term: String,
    category: R::Category,
    current_page: usize,
    page_size: usize,
}

/// The visible slice of a listing plus its pagination controls.
#[derive(Debug)]
pub struct PageView<'a, R> {
    pub rows: Vec<&'a R>,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub page_numbers: RangeInclusive<usize>,
    pub filtered_count: usize,
    pub total_count: usize,
    /// 1-based positions of the first and last visible rows, if any.
    pub visible_range: Option<(usize, usize)>,
}

impl<R: Searchable> Listing<R> {
    pub fn new(page_size: usize) -> Self {
        Self::with_records(Vec::new(), page_size)
    }

    pub fn with_records(records: Vec<R>, page_size: usize) -> Self {
        Self {
            records,
            search_term: String::new(),
            category: R::Category::default(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Replace the collection, e.g. after a re-fetch. The search term is kept.
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.clamp_page();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn category(&self) -> R::Category {
        self.category
    }

    pub fn set_category(&mut self, category: R::Category) {
        self.category = category;
        self.current_page = 1;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filtered(&self) -> impl Iterator<Item = &R> {
        let category = self.category;
        self.records
            .iter()
            .filter(move |r| r.in_category(category) && r.matches(&self.search_term))
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().count()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.current_page.saturating_sub(1));
    }

    fn clamp_page(&mut self) {
        self.set_page(self.current_page);
    }

    /// Up to `PAGE_WINDOW` page numbers centred on the current page.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        let total = self.total_pages();
        let span = PAGE_WINDOW.min(total);
        let half = PAGE_WINDOW / 2;
        let start = self
            .current_page
            .saturating_sub(half)
            .clamp(1, total + 1 - span);
        start..=start + span - 1
    }

    pub fn render(&self) -> PageView<'_, R> {
        let total_pages = self.total_pages();
        let filtered_count = self.filtered_count();
        let skipped = (self.current_page - 1) * self.page_size;
        let rows: Vec<&R> = self
            .filtered()
            .skip(skipped)
            .take(self.page_size)
            .collect();
        let visible_range = (!rows.is_empty()).then(|| (skipped + 1, skipped + rows.len()));

        PageView {
            rows,
            current_page: self.current_page,
            total_pages,
            has_previous: self.current_page > 1,
            has_next: self.current_page < total_pages,
            page_numbers: self.page_numbers(),
            filtered_count,
            total_count: self.records.len(),
            visible_range,
        }
    }
}

/// Lifecycle of the one fetch a screen performs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A listing whose records come from a remote endpoint.
#[derive(Debug, Clone)]
pub struct RemoteListing<R: Searchable> {
    pub listing: Listing<R>,
    state: FetchState,
}

impl<R: Searchable> RemoteListing<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            listing: Listing::new(page_size),
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// True until the first fetch has been started.
    pub fn needs_fetch(&self) -> bool {
        self.state == FetchState::Idle
    }

    /// Mark a fetch as started. Returns `false` if one is already in flight.
    pub fn start_fetch(&mut self) -> bool {
        if self.state.is_loading() {
            log::debug!("Fetch already in flight, ignoring request");
            return false;
        }
        self.state = FetchState::Loading;
        true
    }

    /// Re-issue the fetch after a failure.
    pub fn retry(&mut self) -> bool {
        log::info!("Retrying fetch after: {:?}", self.state.error());
        self.start_fetch()
    }

    pub fn finish_fetch(&mut self, result: crate::Result<Vec<R>>) {
        match result {
            Ok(records) => {
                log::debug!("Fetched {} record(s)", records.len());
                self.listing.set_records(records);
                self.state = FetchState::Ready;
            }
            Err(e) => {
                log::warn!("Fetch failed: {}", e);
                self.state = FetchState::Failed(e.display_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        flagged: bool,
    }

    fn row(id: &str, name: &str) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            flagged: false,
        }
    }

    impl Searchable for Row {
        type Category = bool;

        fn search_fields(&self) -> Vec<&str> {
            vec![self.id.as_str(), self.name.as_str()]
        }

        fn in_category(&self, only_flagged: bool) -> bool {
            !only_flagged || self.flagged
        }
    }

    fn numbered(count: usize) -> Vec<Row> {
        (1..=count)
            .map(|i| row(&format!("id{:02}", i), &format!("Player {}", i)))
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_over_all_fields() {
        let mut listing = Listing::with_records(
            vec![row("Abc102", "Virat"), row("Def456", "Rohit"), row("x1", "ABCD")],
            10,
        );
        listing.set_search_term("abc");
        let ids: Vec<_> = listing.filtered().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["Abc102", "x1"]);

        listing.set_search_term("ROHIT");
        assert_eq!(listing.filtered_count(), 1);
    }

    #[test]
    fn test_total_pages() {
        for (count, size, expected) in [(0, 4, 1), (1, 4, 1), (4, 4, 1), (5, 4, 2), (9, 4, 3)] {
            let listing = Listing::with_records(numbered(count), size);
            assert_eq!(listing.total_pages(), expected, "count={} size={}", count, size);
        }
    }

    #[test]
    fn test_zero_page_size_is_raised_to_one() {
        let listing = Listing::with_records(numbered(3), 0);
        assert_eq!(listing.page_size(), 1);
        assert_eq!(listing.total_pages(), 3);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut listing = Listing::with_records(numbered(10), 3);
        listing.set_page(0);
        assert_eq!(listing.current_page(), 1);
        listing.set_page(99);
        assert_eq!(listing.current_page(), 4);
        listing.next_page();
        assert_eq!(listing.current_page(), 4);
        listing.set_page(1);
        listing.previous_page();
        assert_eq!(listing.current_page(), 1);
    }

    #[test]
    fn test_search_resets_page() {
        let mut listing = Listing::with_records(numbered(20), 5);
        listing.set_page(3);
        listing.set_search_term("player 1");
        assert_eq!(listing.current_page(), 1);

        listing.set_page(2);
        listing.set_search_term("");
        assert_eq!(listing.current_page(), 1);
    }

    #[test]
    fn test_category_resets_page_and_filters() {
        let mut records = numbered(6);
        records[1].flagged = true;
        records[4].flagged = true;
        let mut listing = Listing::with_records(records, 2);
        listing.set_page(3);
        listing.set_category(true);
        assert_eq!(listing.current_page(), 1);
        let ids: Vec<_> = listing.filtered().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["id02", "id05"]);
    }

    #[test]
    fn test_render_slices_last_page() {
        let mut listing = Listing::with_records(numbered(10), 4);
        listing.set_page(3);
        let view = listing.render();
        let ids: Vec<_> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["id09", "id10"]);
        assert!(view.has_previous);
        assert!(!view.has_next);
        assert_eq!(view.visible_range, Some((9, 10)));
        assert_eq!(view.filtered_count, 10);
        assert_eq!(view.total_count, 10);
    }

    #[test]
    fn test_render_empty_result() {
        let mut listing = Listing::with_records(numbered(10), 4);
        listing.set_search_term("nobody");
        let view = listing.render();
        assert!(view.rows.is_empty());
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 1);
        assert!(!view.has_previous);
        assert!(!view.has_next);
        assert_eq!(view.visible_range, None);
        assert_eq!(view.page_numbers, 1..=1);
    }

    #[test]
    fn test_rendered_rows_always_match_term() {
        let mut listing = Listing::with_records(numbered(40), 7);
        for term in ["1", "player 2", "ID3", "zz", ""] {
            listing.set_search_term(term);
            for page in 1..=listing.total_pages() {
                listing.set_page(page);
                for r in listing.render().rows {
                    assert!(r.matches(term));
                }
            }
        }
    }

    #[test]
    fn test_page_numbers_window() {
        let mut listing = Listing::with_records(numbered(100), 10);
        assert_eq!(listing.page_numbers(), 1..=5);
        listing.set_page(6);
        assert_eq!(listing.page_numbers(), 4..=8);
        listing.set_page(10);
        assert_eq!(listing.page_numbers(), 6..=10);

        let small = Listing::with_records(numbered(5), 2);
        assert_eq!(small.page_numbers(), 1..=3);
    }

    #[test]
    fn test_set_records_reclamps_page() {
        let mut listing = Listing::with_records(numbered(20), 5);
        listing.set_page(4);
        listing.set_records(numbered(6));
        assert_eq!(listing.current_page(), 2);
    }

    #[test]
    fn test_remote_listing_single_outstanding_fetch() {
        let mut remote: RemoteListing<Row> = RemoteListing::new(5);
        assert!(remote.needs_fetch());
        assert!(remote.start_fetch());
        assert!(!remote.start_fetch());
        remote.finish_fetch(Ok(numbered(7)));
        assert_eq!(remote.state(), &FetchState::Ready);
        assert_eq!(remote.listing.total_pages(), 2);
    }

    #[test]
    fn test_remote_listing_failure_and_retry() {
        let mut remote: RemoteListing<Row> = RemoteListing::new(5);
        remote.start_fetch();
        remote.finish_fetch(Err(Error::Api("Failed to fetch users".to_string())));
        assert_eq!(remote.state().error(), Some("Failed to fetch users"));
        assert!(!remote.needs_fetch());

        assert!(remote.retry());
        assert!(remote.state().is_loading());
        remote.finish_fetch(Ok(numbered(3)));
        assert_eq!(remote.state(), &FetchState::Ready);
        assert_eq!(remote.listing.records().len(), 3);
    }

    #[test]
    fn test_remote_listing_debug_shows_state_and_category() {
        let mut remote: RemoteListing<Row> = RemoteListing::new(5);
        remote.listing.set_category(true);
        remote.start_fetch();

        let dump = format!("{:?}", remote);
        assert!(dump.contains("Loading"));
        assert!(dump.contains("category: true"));
    }

    #[test]
    fn test_visible_range_on_middle_page() {
        let mut listing = Listing::with_records(numbered(12), 5);
        listing.next_page();
        assert_eq!(listing.render().visible_range, Some((6, 10)));
    }
}
