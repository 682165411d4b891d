use chrono::{DateTime, Utc};
use folio_model::Record;
use folio_query::{apply, FacetSet, FilterState, SortKey};

/// Presentation state of a listing view.
///
/// `Loading → Ready/Empty/Error` on the initial fetch,
/// `Ready → Refreshing → Ready/Empty/Error` on pull-to-refresh. Filter and
/// sort changes recompute synchronously from the cached collection and only
/// move between `Ready` and `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedPhase {
    Loading,
    Ready,
    Refreshing,
    /// Fetch succeeded but the filtered result is zero-length.
    Empty,
    /// Unrecoverable fetch failure. Previously loaded items are retained
    /// until an explicit retry.
    Error(String),
}

/// Epoch-stamped handle for one fetch. Resolving with a stale ticket is a
/// no-op, which is how late completions after unmount are suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
}

/// Cached collection plus everything a listing view derives from it.
///
/// Single-owner by design: the UI thread owns the feed, fetches resolve back
/// into it, and all recomputation is synchronous. Facets are recomputed from
/// the collection on every replacement (never mutated independently), and
/// filter selections are sanitized against the fresh facets so a refresh
/// cannot leave a stale selection filtering everything out.
pub struct Feed<T> {
    items: Vec<T>,
    loaded: bool,
    filters: FilterState,
    sort_key: SortKey,
    featured_first: bool,
    facets: FacetSet,
    phase: FeedPhase,
    epoch: u64,
    in_flight: bool,
    clock: fn() -> DateTime<Utc>,
}

impl<T: Record> Feed<T> {
    pub fn new(sort_key: SortKey, featured_first: bool) -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            filters: FilterState::default(),
            sort_key,
            featured_first,
            facets: FacetSet::default(),
            phase: FeedPhase::Loading,
            epoch: 0,
            in_flight: false,
            clock: Utc::now,
        }
    }

    /// Deterministic time source for tests; the date filter compares against
    /// this clock.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn phase(&self) -> &FeedPhase {
        &self.phase
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn facets(&self) -> &FacetSet {
        &self.facets
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The filtered, sorted view of the cached collection.
    pub fn visible(&self) -> Vec<&T> {
        apply(
            &self.items,
            &self.filters,
            self.sort_key,
            self.featured_first,
            (self.clock)(),
        )
    }

    /// Start a fetch, entering `Loading` (first load) or `Refreshing`.
    /// Returns `None` while another fetch is outstanding: concurrent refresh
    /// requests coalesce instead of queueing duplicate state updates.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.in_flight {
            log::debug!("fetch already in flight, coalescing");
            return None;
        }
        self.in_flight = true;
        self.epoch += 1;
        self.phase = if self.loaded {
            FeedPhase::Refreshing
        } else {
            FeedPhase::Loading
        };
        Some(FetchTicket { epoch: self.epoch })
    }

    /// Apply a fetch outcome. Returns false when the ticket is stale (the
    /// feed was detached or a newer fetch superseded it); stale outcomes are
    /// discarded without touching state.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<T>, folio_client::ClientError>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            log::debug!(
                "discarding stale fetch result (epoch {} != {})",
                ticket.epoch,
                self.epoch
            );
            return false;
        }
        self.in_flight = false;
        match outcome {
            Ok(items) => {
                self.loaded = true;
                self.replace_items(items);
            }
            Err(err) => {
                log::warn!("fetch failed: {err}");
                self.phase = FeedPhase::Error(err.to_string());
            }
        }
        true
    }

    /// Drop interest in any outstanding fetch (screen unmount). The next
    /// mount starts fresh with `begin_fetch`.
    pub fn detach(&mut self) {
        self.epoch += 1;
        self.in_flight = false;
    }

    /// Mutate filter selections; recomputes the view synchronously, no
    /// re-fetch. Selections are sanitized against the current facets.
    pub fn update_filters(&mut self, update: impl FnOnce(&mut FilterState)) {
        update(&mut self.filters);
        self.filters.sanitize(&self.facets);
        self.refresh_phase();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.refresh_phase();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.facets = FacetSet::extract(&self.items);
        self.filters.sanitize(&self.facets);
        self.refresh_phase();
    }

    fn refresh_phase(&mut self) {
        // Phase is only derived from the view once a fetch has succeeded;
        // before that, Loading/Error stand.
        if !self.loaded || self.in_flight {
            return;
        }
        if let FeedPhase::Error(_) = self.phase {
            return;
        }
        self.phase = if self.visible().is_empty() {
            FeedPhase::Empty
        } else {
            FeedPhase::Ready
        };
    }
}
