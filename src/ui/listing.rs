use crate::catalog::CatalogSource;
use crate::listing::{
    CancelHandle, Debouncer, Dispatch, ListController, ListStatus, Scheduler, SEARCH_DEBOUNCE,
};
use dioxus::core::Task;
use dioxus::prelude::*;
use std::time::Duration;
use tracing::{debug, warn};

/// Runs debounced callbacks as tasks of the component that owns the listing,
/// so they die with it when the page unmounts.
#[derive(Clone, Copy, Default)]
pub struct TaskScheduler;

impl CancelHandle for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

impl Scheduler for TaskScheduler {
    type Handle = Task;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) -> Task {
        spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        })
    }
}

/// Snapshot of a listing for rendering
#[derive(Clone, PartialEq)]
pub struct ListingView<T> {
    pub items: Vec<T>,
    pub status: ListStatus,
    /// What is in the search box right now
    pub raw_term: String,
    /// The term the current results are for
    pub search_term: String,
    pub searching: bool,
    pub total: Option<u64>,
    pub counting: bool,
    pub page: u32,
    pub total_pages: u32,
    pub can_previous: bool,
    pub can_next: bool,
}

/// A [`ListController`] wired to a [`CatalogSource`] and the Dioxus runtime.
///
/// Fetches run as tasks of the owning component. Each one writes its result
/// back through the controller, which drops anything superseded in the
/// meantime.
pub struct Listing<T: 'static, S: 'static> {
    controller: Signal<ListController<T>>,
    debouncer: Signal<Debouncer<TaskScheduler>>,
    source: Signal<S>,
}

impl<T: 'static, S: 'static> Clone for Listing<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, S: 'static> Copy for Listing<T, S> {}

/// Create a listing over `source` and start its first load on mount
pub fn use_listing<T, S>(source: S, page_size: u32) -> Listing<T, S>
where
    T: Clone + 'static,
    S: CatalogSource<T> + Clone + 'static,
{
    let controller = use_signal(|| ListController::new(page_size));
    let debouncer = use_signal(|| Debouncer::new(TaskScheduler, SEARCH_DEBOUNCE));
    let source = use_signal(|| source);
    let listing = Listing {
        controller,
        debouncer,
        source,
    };

    use_effect(move || {
        debug!("Starting initial listing load");
        listing.load();
    });

    listing
}

impl<T, S> Listing<T, S>
where
    T: Clone + 'static,
    S: CatalogSource<T> + Clone + 'static,
{
    pub fn view(&self) -> ListingView<T> {
        let controller = self.controller.read();
        let list = controller.list();
        let count = controller.count();
        ListingView {
            items: list.items.clone(),
            status: list.status.clone(),
            raw_term: controller.search().raw_term().to_string(),
            search_term: controller.search().debounced_term().trim().to_string(),
            searching: controller.is_searching(),
            total: count.total,
            counting: count.loading,
            page: controller.page(),
            total_pages: controller.total_pages(),
            can_previous: controller.can_go_previous(),
            can_next: controller.can_go_next(),
        }
    }

    fn load(self) {
        self.apply(|controller| controller.load());
    }

    /// Record a keystroke and (re)arm the debounce timer
    pub fn input(self, text: String) {
        let mut controller = self.controller;
        let ticket = controller.write().on_input_change(text);

        let mut debouncer = self.debouncer;
        debouncer.write().call(move || {
            let dispatch = controller.write().commit_input(ticket);
            self.run(dispatch);
        });
    }

    /// Search for the current input right away
    pub fn submit(self) {
        self.cancel_pending();
        self.apply(|controller| controller.submit());
    }

    pub fn clear(self) {
        self.cancel_pending();
        self.apply(|controller| controller.clear());
    }

    pub fn next_page(self) {
        self.apply(|controller| controller.next_page());
    }

    pub fn previous_page(self) {
        self.apply(|controller| controller.previous_page());
    }

    pub fn refetch(self) {
        self.apply(|controller| controller.refetch());
    }

    fn cancel_pending(self) {
        let mut debouncer = self.debouncer;
        debouncer.write().cancel();
    }

    fn apply(self, change: impl FnOnce(&mut ListController<T>) -> Dispatch) {
        let mut controller = self.controller;
        let dispatch = change(&mut controller.write());
        self.run(dispatch);
    }

    fn run(self, dispatch: Dispatch) {
        if let Some(fetch) = dispatch.list {
            let source = self.source.peek().clone();
            let mut controller = self.controller;
            spawn(async move {
                let result = source.fetch_page(&fetch).await.map_err(|e| {
                    warn!("✗ List fetch #{} failed: {}", fetch.seq, e);
                    e.to_string()
                });
                controller.write().complete_list(fetch.seq, result);
            });
        }

        if let Some(fetch) = dispatch.count {
            let source = self.source.peek().clone();
            let mut controller = self.controller;
            spawn(async move {
                let result = source.fetch_count(&fetch).await.map_err(|e| {
                    warn!("✗ Count fetch #{} failed: {}", fetch.seq, e);
                    e.to_string()
                });
                controller.write().complete_count(fetch.seq, result);
            });
        }
    }
}
