// Test support utilities for both unit and integration tests

use crate::catalog::{Artist, CatalogError, CatalogSource, Connection, Edge, Music, PageInfo};
use crate::listing::{CancelHandle, CountFetch, ListFetch, ListMode, PageRequest, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory catalog for testing
///
/// Serves a fixed list of items with the same paging rules as the backend:
/// cursors are opaque per-item tokens, `after`/`before` are exclusive, and
/// search is a case-insensitive substring match on the item name.
pub struct MockCatalog<T> {
    items: Vec<T>,
    name_of: fn(&T) -> &str,
    page_fetches: Mutex<Vec<ListFetch>>,
    count_fetches: Mutex<Vec<CountFetch>>,
    fail_next: Mutex<Option<String>>,
}

impl MockCatalog<Artist> {
    pub fn artists(items: Vec<Artist>) -> Self {
        Self::new(items, artist_name)
    }
}

impl MockCatalog<Music> {
    pub fn musics(items: Vec<Music>) -> Self {
        Self::new(items, music_name)
    }
}

fn artist_name(artist: &Artist) -> &str {
    &artist.name
}

fn music_name(music: &Music) -> &str {
    &music.name
}

impl<T: Clone> MockCatalog<T> {
    pub fn new(items: Vec<T>, name_of: fn(&T) -> &str) -> Self {
        MockCatalog {
            items,
            name_of,
            page_fetches: Mutex::new(Vec::new()),
            count_fetches: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    /// Cursor token for the item at `index`
    pub fn cursor_at(index: usize) -> String {
        format!("cursor-{}", index)
    }

    /// Make the next page fetch fail with a GraphQL error
    pub fn fail_next_page(&self, message: &str) {
        *self.fail_next.lock().unwrap() = Some(message.to_string());
    }

    /// Every page fetch received so far, in order
    pub fn page_fetches(&self) -> Vec<ListFetch> {
        self.page_fetches.lock().unwrap().clone()
    }

    pub fn count_fetches(&self) -> Vec<CountFetch> {
        self.count_fetches.lock().unwrap().clone()
    }

    fn matching(&self, mode: &ListMode) -> Vec<(usize, &T)> {
        let term = mode.term().map(str::to_lowercase);
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| match &term {
                Some(term) => (self.name_of)(item).to_lowercase().contains(term),
                None => true,
            })
            .collect()
    }

    fn position(matching: &[(usize, &T)], cursor: &Option<String>) -> Option<usize> {
        let cursor = cursor.as_ref()?;
        matching
            .iter()
            .position(|(index, _)| &Self::cursor_at(*index) == cursor)
    }

    fn page(&self, mode: &ListMode, page: &PageRequest) -> Connection<T> {
        let matching = self.matching(mode);
        let (start, end) = match page {
            PageRequest::Forward { after, size } => {
                let start = Self::position(&matching, after).map_or(0, |p| p + 1);
                (start, (start + *size as usize).min(matching.len()))
            }
            PageRequest::Backward { before, size } => {
                let end = Self::position(&matching, before).unwrap_or(matching.len());
                (end.saturating_sub(*size as usize), end)
            }
        };

        let edges: Vec<Edge<T>> = matching[start..end]
            .iter()
            .map(|(index, item)| Edge {
                node: (*item).clone(),
                cursor: Some(Self::cursor_at(*index)),
            })
            .collect();

        let page_info = PageInfo {
            has_next_page: end < matching.len(),
            has_previous_page: start > 0,
            start_cursor: edges.first().and_then(|edge| edge.cursor.clone()),
            end_cursor: edges.last().and_then(|edge| edge.cursor.clone()),
        };

        Connection { edges, page_info }
    }
}

#[async_trait::async_trait]
impl<T> CatalogSource<T> for MockCatalog<T>
where
    T: Clone + Send + Sync,
{
    async fn fetch_page(&self, fetch: &ListFetch) -> Result<Connection<T>, CatalogError> {
        self.page_fetches.lock().unwrap().push(fetch.clone());

        if let Some(message) = self.fail_next.lock().unwrap().take() {
            return Err(CatalogError::GraphQl(message));
        }
        if fetch.mode.is_search() && !fetch.page.is_forward() {
            return Err(CatalogError::InvalidInput(
                "search results can only be paged forward".to_string(),
            ));
        }

        Ok(self.page(&fetch.mode, &fetch.page))
    }

    async fn fetch_count(&self, fetch: &CountFetch) -> Result<u64, CatalogError> {
        self.count_fetches.lock().unwrap().push(fetch.clone());
        Ok(self.matching(&fetch.mode).len() as u64)
    }
}

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    tasks: Vec<(u64, Duration, Task)>,
}

/// Scheduler driven by a virtual clock
///
/// Nothing runs until [`advance`](Self::advance) moves the clock past a
/// task's deadline.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

pub struct ManualHandle {
    id: u64,
    clock: Rc<RefCell<Clock>>,
}

impl CancelHandle for ManualHandle {
    fn cancel(self) {
        self.clock
            .borrow_mut()
            .tasks
            .retain(|(id, _, _)| *id != self.id);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.tasks.push((id, due, task));
        ManualHandle {
            id,
            clock: self.clock.clone(),
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, running every task that comes due in order
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let task = {
                let mut clock = self.clock.borrow_mut();
                let next = clock
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, due, _))| *due <= target)
                    .min_by_key(|(_, (id, due, _))| (*due, *id))
                    .map(|(position, _)| position);
                match next {
                    Some(position) => {
                        let (_, due, task) = clock.tasks.remove(position);
                        clock.now = due;
                        task
                    }
                    None => break,
                }
            };
            task();
        }
        self.clock.borrow_mut().now = target;
    }

    /// Tasks scheduled and not yet run or cancelled
    pub fn pending(&self) -> usize {
        self.clock.borrow().tasks.len()
    }
}

/// Artist fixture with a name-derived slug
pub fn artist(id: u32, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        image: None,
        slug: name.to_lowercase().replace(' ', "-"),
        created_at: None,
    }
}

/// Music fixture owned by `artist_id`
pub fn music(id: u32, name: &str, artist_id: u32) -> Music {
    Music {
        id: id.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        lyrics: None,
        image: None,
        file: format!("https://cdn.example/{}.mp3", id),
        artist_id: artist_id.to_string(),
        created_at: None,
        updated_at: None,
    }
}
