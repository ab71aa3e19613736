use super::cursor::{PageCursor, PageRequest, PageVariables};
use super::search::{ilike_pattern, InputTicket, SearchQuery};
use crate::catalog::{Connection, PageInfo};
use tracing::debug;

/// Which collection query a fetch goes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMode {
    Browse,
    Search { term: String },
}

impl ListMode {
    /// Search mode over the trimmed `term`, or `None` when it is blank
    pub fn search(term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            None
        } else {
            Some(ListMode::Search {
                term: term.to_string(),
            })
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, ListMode::Search { .. })
    }

    pub fn term(&self) -> Option<&str> {
        match self {
            ListMode::Browse => None,
            ListMode::Search { term } => Some(term),
        }
    }

    /// `ilike` filter value for search mode
    pub fn pattern(&self) -> Option<String> {
        self.term().map(ilike_pattern)
    }
}

/// A page fetch the driver should run, tagged with its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFetch {
    pub seq: u64,
    pub mode: ListMode,
    pub page: PageRequest,
}

impl ListFetch {
    pub fn variables(&self) -> PageVariables {
        self.page.variables()
    }
}

/// A total-count fetch. Shares the mode, never the pagination arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountFetch {
    pub seq: u64,
    pub mode: ListMode,
}

/// Fetches to start after a state change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub list: Option<ListFetch>,
    pub count: Option<CountFetch>,
}

impl Dispatch {
    pub fn is_empty(&self) -> bool {
        self.list.is_none() && self.count.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing requested for the current query yet
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
    pub status: ListStatus,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_info: PageInfo::default(),
            status: ListStatus::Idle,
        }
    }
}

impl<T> ListState<T> {
    fn loading() -> Self {
        Self {
            status: ListStatus::Loading,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountState {
    pub total: Option<u64>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Search, pagination and fetch bookkeeping for one listing page.
///
/// The controller performs no IO. Every mutating call returns the
/// [`Dispatch`] the caller has to run; results come back through
/// [`complete_list`](Self::complete_list) and
/// [`complete_count`](Self::complete_count) and are only applied when their
/// sequence number is still the latest one issued for that slot.
#[derive(Debug, Clone)]
pub struct ListController<T> {
    search: SearchQuery,
    cursor: PageCursor,
    page_size: u32,
    page: u32,
    /// Cursors advanced from while searching, for forward-only rewinds
    rewind: Vec<Option<String>>,
    next_seq: u64,
    last_list: Option<ListFetch>,
    last_count: Option<CountFetch>,
    list: ListState<T>,
    count: CountState,
}

impl<T> ListController<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: SearchQuery::default(),
            cursor: PageCursor::start(),
            page_size,
            page: 1,
            rewind: Vec::new(),
            next_seq: 0,
            last_list: None,
            last_count: None,
            list: ListState::default(),
            count: CountState::default(),
        }
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn list(&self) -> &ListState<T> {
        &self.list
    }

    pub fn count(&self) -> &CountState {
        &self.count
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 1-based number of the page on screen, counted from visited pages
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.count
            .total
            .map(|total| total.div_ceil(u64::from(self.page_size)) as u32)
            .unwrap_or(0)
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_active()
    }

    pub fn mode(&self) -> ListMode {
        ListMode::search(self.search.debounced_term()).unwrap_or(ListMode::Browse)
    }

    pub fn last_list_fetch(&self) -> Option<&ListFetch> {
        self.last_list.as_ref()
    }

    pub fn can_go_next(&self) -> bool {
        let info = &self.list.page_info;
        info.has_next_page && info.end_cursor.is_some()
    }

    pub fn can_go_previous(&self) -> bool {
        let info = &self.list.page_info;
        let guard = info.has_previous_page && info.start_cursor.is_some();
        if self.is_searching() {
            guard && !self.rewind.is_empty()
        } else {
            guard
        }
    }

    /// Initial fetch when the page mounts
    pub fn load(&mut self) -> Dispatch {
        self.dispatch(true)
    }

    /// Record a keystroke. The returned ticket must be handed to
    /// [`commit_input`](Self::commit_input) once the quiet period elapses.
    pub fn on_input_change(&mut self, text: String) -> InputTicket {
        self.search.set_raw(text)
    }

    pub fn commit_input(&mut self, ticket: InputTicket) -> Dispatch {
        if !self.search.commit(ticket) {
            return Dispatch::default();
        }
        self.reset_position();
        self.dispatch(true)
    }

    /// Commit the current input without waiting for the debounce
    pub fn submit(&mut self) -> Dispatch {
        self.search.flush();
        self.reset_position();
        self.dispatch(true)
    }

    pub fn clear(&mut self) -> Dispatch {
        self.search.clear();
        self.reset_position();
        self.dispatch(true)
    }

    pub fn next_page(&mut self) -> Dispatch {
        if !self.can_go_next() {
            return Dispatch::default();
        }
        let end = self.list.page_info.end_cursor.clone();
        if self.is_searching() {
            self.rewind.push(self.cursor.value.clone());
        }
        self.cursor = PageCursor::forward(end);
        self.page += 1;
        self.dispatch(false)
    }

    /// Step back one page. Browsing pages backwards from the start cursor;
    /// searching replays the forward cursor the current page was reached from.
    pub fn previous_page(&mut self) -> Dispatch {
        if !self.can_go_previous() {
            return Dispatch::default();
        }
        if self.is_searching() {
            let earlier = self.rewind.pop().flatten();
            self.cursor = PageCursor::forward(earlier);
        } else {
            let start = self.list.page_info.start_cursor.clone();
            self.cursor = PageCursor::backward(start);
        }
        self.page = self.page.saturating_sub(1).max(1);
        self.dispatch(false)
    }

    /// Re-issue the last list and count fetches with the same arguments
    pub fn refetch(&mut self) -> Dispatch {
        let list = self.last_list.clone().map(|fetch| ListFetch {
            seq: self.bump(),
            ..fetch
        });
        if let Some(fetch) = &list {
            self.list = ListState::loading();
            self.last_list = Some(fetch.clone());
        }

        let count = self.last_count.clone().map(|fetch| CountFetch {
            seq: self.bump(),
            ..fetch
        });
        if let Some(fetch) = &count {
            self.count.loading = true;
            self.count.error = None;
            self.last_count = Some(fetch.clone());
        }

        Dispatch { list, count }
    }

    /// Apply a page result. Returns false if `seq` has been superseded.
    pub fn complete_list(&mut self, seq: u64, result: Result<Connection<T>, String>) -> bool {
        if self.last_list.as_ref().map(|fetch| fetch.seq) != Some(seq) {
            debug!("Ignoring stale list response #{}", seq);
            return false;
        }
        self.list = match result {
            Ok(page) => ListState {
                page_info: page.page_info.clone(),
                items: page.into_nodes(),
                status: ListStatus::Loaded,
            },
            Err(message) => ListState {
                status: ListStatus::Failed(message),
                ..ListState::default()
            },
        };
        true
    }

    /// Apply a count result. Returns false if `seq` has been superseded.
    pub fn complete_count(&mut self, seq: u64, result: Result<u64, String>) -> bool {
        if self.last_count.as_ref().map(|fetch| fetch.seq) != Some(seq) {
            debug!("Ignoring stale count response #{}", seq);
            return false;
        }
        self.count.loading = false;
        match result {
            Ok(total) => {
                self.count.total = Some(total);
                self.count.error = None;
            }
            Err(message) => {
                self.count.total = None;
                self.count.error = Some(message);
            }
        }
        true
    }

    fn reset_position(&mut self) {
        self.cursor = PageCursor::start();
        self.page = 1;
        self.rewind.clear();
    }

    fn bump(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn dispatch(&mut self, with_count: bool) -> Dispatch {
        let mode = self.mode();
        let page = if mode.is_search() {
            debug_assert!(self.cursor.request(self.page_size).is_forward());
            PageRequest::Forward {
                after: self.cursor.value.clone(),
                size: self.page_size,
            }
        } else {
            self.cursor.request(self.page_size)
        };

        let list = ListFetch {
            seq: self.bump(),
            mode: mode.clone(),
            page,
        };
        debug!(
            "Dispatching list fetch #{} ({:?}, {:?})",
            list.seq, list.mode, list.page
        );
        self.list = ListState::loading();
        self.last_list = Some(list.clone());

        let count = if with_count {
            let fetch = CountFetch {
                seq: self.bump(),
                mode,
            };
            self.count = CountState {
                total: None,
                loading: true,
                error: None,
            };
            self.last_count = Some(fetch.clone());
            Some(fetch)
        } else {
            None
        };

        Dispatch {
            list: Some(list),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Edge;
    use crate::listing::Direction;

    fn page(names: &[&str], info: PageInfo) -> Connection<String> {
        Connection {
            edges: names
                .iter()
                .map(|name| Edge {
                    node: name.to_string(),
                    cursor: Some(format!("c-{name}")),
                })
                .collect(),
            page_info: info,
        }
    }

    fn info(next: bool, previous: bool, start: &str, end: &str) -> PageInfo {
        PageInfo {
            has_next_page: next,
            has_previous_page: previous,
            start_cursor: Some(start.to_string()),
            end_cursor: Some(end.to_string()),
        }
    }

    fn loaded(next: bool, previous: bool, start: &str, end: &str) -> ListController<String> {
        let mut controller = ListController::new(12);
        let dispatch = controller.load();
        let seq = dispatch.list.unwrap().seq;
        controller.complete_list(seq, Ok(page(&["a"], info(next, previous, start, end))));
        controller
    }

    fn list_seq(dispatch: &Dispatch) -> u64 {
        dispatch.list.as_ref().unwrap().seq
    }

    #[test]
    fn test_list_starts_idle() {
        let controller = ListController::<String>::new(12);
        assert_eq!(controller.list().status, ListStatus::Idle);
        assert!(controller.last_list_fetch().is_none());
    }

    #[test]
    fn test_load_issues_browse_and_count() {
        let mut controller = ListController::<String>::new(12);
        let dispatch = controller.load();

        let list = dispatch.list.unwrap();
        assert_eq!(list.mode, ListMode::Browse);
        assert_eq!(
            list.page,
            PageRequest::Forward {
                after: None,
                size: 12
            }
        );
        assert_eq!(dispatch.count.unwrap().mode, ListMode::Browse);
        assert!(controller.list().is_loading());
        assert!(controller.count().loading);
    }

    #[test]
    fn test_next_page_is_noop_without_next() {
        let mut controller = loaded(false, false, "s", "e");
        let before_cursor = controller.cursor().clone();
        let before_list = controller.list().clone();

        assert!(controller.next_page().is_empty());
        assert_eq!(controller.cursor(), &before_cursor);
        assert_eq!(controller.list(), &before_list);
        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn test_previous_page_is_noop_without_previous() {
        let mut controller = loaded(true, false, "s", "e");
        assert!(controller.previous_page().is_empty());
        assert!(controller.cursor().is_start());
    }

    #[test]
    fn test_next_page_moves_forward_from_end_cursor() {
        let mut controller = loaded(true, false, "s", "e");
        let dispatch = controller.next_page();

        assert_eq!(controller.cursor(), &PageCursor::forward(Some("e".into())));
        assert_eq!(controller.page(), 2);
        let list = dispatch.list.unwrap();
        assert_eq!(list.variables().after.as_deref(), Some("e"));
        assert_eq!(list.variables().last, None);
        assert!(dispatch.count.is_none());
    }

    #[test]
    fn test_previous_page_browses_backward_from_start_cursor() {
        let mut controller = loaded(true, true, "s", "e");
        let dispatch = controller.previous_page();

        assert_eq!(controller.cursor().direction, Direction::Backward);
        let vars = dispatch.list.unwrap().variables();
        assert_eq!(vars.last, Some(12));
        assert_eq!(vars.before.as_deref(), Some("s"));
        assert_eq!(vars.first, None);
        assert_eq!(vars.after, None);
    }

    #[test]
    fn test_pagination_blocked_while_loading() {
        let mut controller = loaded(true, false, "s", "e");
        controller.next_page();
        // page info of the previous page is gone until the new one lands
        assert!(controller.next_page().is_empty());
        assert_eq!(controller.page(), 2);
    }

    #[test]
    fn test_commit_resets_cursor_and_switches_to_search() {
        let mut controller = loaded(true, false, "s", "abc123");
        let seq = list_seq(&controller.next_page());
        controller.complete_list(seq, Ok(page(&["b"], info(true, true, "x", "y"))));
        assert_eq!(controller.cursor().value.as_deref(), Some("abc123"));

        let ticket = controller.on_input_change("luna".into());
        let dispatch = controller.commit_input(ticket);

        assert!(controller.cursor().is_start());
        assert_eq!(controller.page(), 1);
        let list = dispatch.list.unwrap();
        assert_eq!(
            list.mode,
            ListMode::Search {
                term: "luna".into()
            }
        );
        assert_eq!(
            list.page,
            PageRequest::Forward {
                after: None,
                size: 12
            }
        );
        assert!(dispatch.count.is_some());
    }

    #[test]
    fn test_stale_ticket_commits_nothing() {
        let mut controller = ListController::<String>::new(12);
        let old = controller.on_input_change("lu".into());
        let _new = controller.on_input_change("luna".into());
        assert!(controller.commit_input(old).is_empty());
        assert_eq!(controller.search().debounced_term(), "");
    }

    #[test]
    fn test_commit_of_same_term_is_noop() {
        let mut controller = ListController::<String>::new(12);
        let ticket = controller.on_input_change("luna".into());
        assert!(!controller.commit_input(ticket).is_empty());
        let ticket = controller.on_input_change("luna".into());
        assert!(controller.commit_input(ticket).is_empty());
    }

    #[test]
    fn test_search_never_issues_backward_variables() {
        let mut controller = ListController::<String>::new(12);
        let ticket = controller.on_input_change("echo".into());
        let seq = list_seq(&controller.commit_input(ticket));
        controller.complete_list(seq, Ok(page(&["a"], info(true, false, "s1", "e1"))));

        let seq = list_seq(&controller.next_page());
        controller.complete_list(seq, Ok(page(&["b"], info(true, true, "s2", "e2"))));
        let seq = list_seq(&controller.next_page());
        controller.complete_list(seq, Ok(page(&["c"], info(false, true, "s3", "e3"))));
        assert_eq!(controller.page(), 3);

        let dispatch = controller.previous_page();
        let list = dispatch.list.unwrap();
        assert_eq!(
            list.page,
            PageRequest::Forward {
                after: Some("e1".into()),
                size: 12
            }
        );
        assert_eq!(controller.page(), 2);
        controller.complete_list(list.seq, Ok(page(&["b"], info(true, true, "s2", "e2"))));

        let list = controller.previous_page().list.unwrap();
        assert_eq!(
            list.page,
            PageRequest::Forward {
                after: None,
                size: 12
            }
        );
        controller.complete_list(list.seq, Ok(page(&["a"], info(true, true, "s1", "e1"))));

        // nothing left to rewind to
        assert!(!controller.can_go_previous());
        assert!(controller.previous_page().is_empty());
    }

    #[test]
    fn test_stale_list_response_is_discarded() {
        let mut controller = loaded(true, false, "s", "X");
        let slow = list_seq(&controller.next_page());
        let fast = list_seq(&controller.refetch());

        assert!(controller.complete_list(fast, Ok(page(&["x"], info(true, true, "X1", "Y")))));
        let seq = list_seq(&controller.next_page());
        assert!(controller.complete_list(seq, Ok(page(&["y"], info(false, true, "Y1", "Y2")))));

        assert!(!controller.complete_list(slow, Ok(page(&["stale"], PageInfo::default()))));
        assert_eq!(controller.list().items, vec!["y".to_string()]);
        assert_eq!(controller.cursor().value.as_deref(), Some("Y"));
    }

    #[test]
    fn test_failure_then_refetch_uses_same_variables() {
        let mut controller = ListController::<String>::new(12);
        let first = controller.load().list.unwrap();
        controller.complete_list(first.seq, Err("network down".into()));
        assert_eq!(controller.list().error(), Some("network down"));

        let retry = controller.refetch().list.unwrap();
        assert_ne!(retry.seq, first.seq);
        assert_eq!(retry.mode, first.mode);
        assert_eq!(retry.page, first.page);
        assert!(controller.list().is_loading());
        assert!(!controller.complete_list(first.seq, Ok(page(&[], PageInfo::default()))));
    }

    #[test]
    fn test_refetch_before_any_fetch_is_noop() {
        let mut controller = ListController::<String>::new(12);
        assert!(controller.refetch().is_empty());
    }

    #[test]
    fn test_count_failure_does_not_touch_list() {
        let mut controller = ListController::<String>::new(12);
        let dispatch = controller.load();
        let list = dispatch.list.unwrap();
        let count = dispatch.count.unwrap();

        controller.complete_list(list.seq, Ok(page(&["a", "b"], PageInfo::default())));
        assert!(controller.complete_count(count.seq, Err("timeout".into())));

        assert_eq!(controller.list().status, ListStatus::Loaded);
        assert_eq!(controller.list().items.len(), 2);
        assert_eq!(controller.count().error.as_deref(), Some("timeout"));
        assert!(!controller.count().loading);
    }

    #[test]
    fn test_stale_count_is_discarded_after_mode_change() {
        let mut controller = ListController::<String>::new(12);
        let browse_count = controller.load().count.unwrap();
        let ticket = controller.on_input_change("solar".into());
        let search_count = controller.commit_input(ticket).count.unwrap();

        assert!(!controller.complete_count(browse_count.seq, Ok(40)));
        assert!(controller.count().loading);
        assert!(controller.complete_count(search_count.seq, Ok(3)));
        assert_eq!(controller.count().total, Some(3));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let mut controller = ListController::<String>::new(12);
        let count = controller.load().count.unwrap();
        assert_eq!(controller.total_pages(), 0);
        controller.complete_count(count.seq, Ok(25));
        assert_eq!(controller.total_pages(), 3);
    }

    #[test]
    fn test_clear_returns_to_browse_page_one() {
        let mut controller = ListController::<String>::new(12);
        let ticket = controller.on_input_change("luna".into());
        let seq = list_seq(&controller.commit_input(ticket));
        controller.complete_list(seq, Ok(page(&["a"], info(true, false, "s", "e"))));
        controller.next_page();

        let dispatch = controller.clear();
        assert!(!controller.is_searching());
        assert_eq!(controller.search().raw_term(), "");
        assert!(controller.cursor().is_start());
        assert_eq!(controller.page(), 1);
        assert_eq!(dispatch.list.unwrap().mode, ListMode::Browse);
    }

    #[test]
    fn test_submit_skips_debounce() {
        let mut controller = ListController::<String>::new(12);
        let pending = controller.on_input_change("midnight".into());
        let dispatch = controller.submit();

        assert!(controller.is_searching());
        assert_eq!(
            dispatch.list.unwrap().mode,
            ListMode::Search {
                term: "midnight".into()
            }
        );
        // the timer firing afterwards must not dispatch again
        assert!(controller.commit_input(pending).is_empty());
    }

    #[test]
    fn test_blank_search_mode_is_rejected() {
        assert_eq!(ListMode::search("   "), None);
        assert_eq!(
            ListMode::search("  luna "),
            Some(ListMode::Search {
                term: "luna".into()
            })
        );
        assert_eq!(
            ListMode::search("luna").unwrap().pattern().as_deref(),
            Some("%luna%")
        );
    }
}
