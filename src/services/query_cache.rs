use crate::config::CacheSettings;
use crate::error::{CacheError, SourceError};
use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error,
}

struct CacheEntry<V> {
    value: Option<V>,
    fetched_at: Option<Instant>,
    last_access: Instant,
    status: QueryStatus,
    invalidated: bool,
    error: Option<CacheError>,
}

impl<V> CacheEntry<V> {
    fn new(now: Instant) -> Self {
        Self {
            value: None,
            fetched_at: None,
            last_access: now,
            status: QueryStatus::Idle,
            invalidated: false,
            error: None,
        }
    }
}

type InFlight<V> = watch::Receiver<Option<Result<V, CacheError>>>;

struct CacheState<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    inflight: HashMap<K, InFlight<V>>,
}

/// Keyed cache with stale-time refetch, single-flight deduplication and
/// idle eviction.
///
/// At most one retrieval per key is outstanding; every caller that arrives
/// while it runs waits on the same result. Retrievals run on their own task,
/// so a caller that stops waiting does not stop the cache from being filled.
pub struct QueryCache<K, V> {
    state: Arc<Mutex<CacheState<K, V>>>,
    settings: CacheSettings,
}

impl<K, V> Clone for QueryCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            settings: self.settings,
        }
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState {
                entries: HashMap::new(),
                inflight: HashMap::new(),
            })),
            settings,
        }
    }

    pub fn settings(&self) -> CacheSettings {
        self.settings
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<K, V>> {
        lock_state(&self.state)
    }

    /// Returns the cached value for `key` when it is fresh, otherwise runs
    /// `fetch` (or joins the retrieval already running for `key`).
    pub async fn request<F, Fut>(&self, key: K, fetch: F) -> Result<V, CacheError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, SourceError>> + Send + 'static,
    {
        let mut rx = {
            let mut state = self.lock();
            let now = Instant::now();

            if let Some(entry) = state.entries.get_mut(&key) {
                entry.last_access = now;
                if let (Some(value), Some(fetched_at)) = (&entry.value, entry.fetched_at) {
                    if !entry.invalidated && now.duration_since(fetched_at) < self.settings.stale_time
                    {
                        debug!(?key, "Cache hit");
                        return Ok(value.clone());
                    }
                }
            }

            let joined = state.inflight.get(&key).cloned();
            match joined {
                Some(rx) => {
                    debug!(?key, "Joining in-flight request");
                    rx
                }
                None => {
                    let (tx, rx) = watch::channel(None);
                    state.inflight.insert(key.clone(), rx.clone());
                    let entry = state
                        .entries
                        .entry(key.clone())
                        .or_insert_with(|| CacheEntry::new(now));
                    entry.status = QueryStatus::Loading;
                    entry.error = None;
                    drop(state);

                    self.spawn_fetch(key.clone(), fetch, tx);
                    rx
                }
            }
        };

        let outcome = match rx.wait_for(|v| v.is_some()).await {
            Ok(done) => done.clone(),
            Err(_) => None,
        };
        outcome.unwrap_or(Err(CacheError::Abandoned))
    }

    fn spawn_fetch<F, Fut>(
        &self,
        key: K,
        fetch: F,
        tx: watch::Sender<Option<Result<V, CacheError>>>,
    ) where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, SourceError>> + Send + 'static,
    {
        let state = Arc::clone(&self.state);
        let settings = self.settings;

        tokio::spawn(async move {
            let result = fetch_with_retry(&key, &fetch, settings).await;
            {
                let mut state = lock_state(&state);
                state.inflight.remove(&key);
                let now = Instant::now();
                let entry = state
                    .entries
                    .entry(key.clone())
                    .or_insert_with(|| CacheEntry::new(now));
                match &result {
                    Ok(value) => {
                        entry.value = Some(value.clone());
                        entry.fetched_at = Some(now);
                        entry.invalidated = false;
                        entry.status = QueryStatus::Success;
                        entry.error = None;
                    }
                    Err(err) => {
                        entry.status = QueryStatus::Error;
                        entry.error = Some(err.clone());
                    }
                }
            }
            tx.send_replace(Some(result));
        });
    }

    pub fn status(&self, key: &K) -> QueryStatus {
        self.lock()
            .entries
            .get(key)
            .map(|e| e.status)
            .unwrap_or(QueryStatus::Idle)
    }

    pub fn last_error(&self, key: &K) -> Option<CacheError> {
        self.lock().entries.get(key).and_then(|e| e.error.clone())
    }

    /// Reads the cached value without triggering a fetch or touching the
    /// access time.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.lock().entries.get(key).and_then(|e| e.value.clone())
    }

    pub fn is_stale(&self, key: &K) -> bool {
        let state = self.lock();
        match state.entries.get(key).and_then(|e| e.fetched_at.map(|t| (t, e.invalidated))) {
            Some((fetched_at, invalidated)) => {
                invalidated || fetched_at.elapsed() >= self.settings.stale_time
            }
            None => true,
        }
    }

    /// Marks `key` stale so the next request refetches. The cached value stays
    /// readable through `peek` until then.
    pub fn invalidate(&self, key: &K) {
        if let Some(entry) = self.lock().entries.get_mut(key) {
            entry.invalidated = true;
            info!(?key, "Cache entry invalidated");
        }
    }

    pub fn invalidate_where(&self, mut predicate: impl FnMut(&K) -> bool) {
        let mut state = self.lock();
        let mut count = 0;
        for (key, entry) in state.entries.iter_mut() {
            if predicate(key) {
                entry.invalidated = true;
                count += 1;
            }
        }
        info!(count, "Cache entries invalidated");
    }

    pub fn invalidate_all(&self) {
        self.invalidate_where(|_| true);
    }

    /// Evicts entries not accessed within the gc time. Entries with a retrieval
    /// in flight are kept. Returns the number of evicted entries.
    pub fn sweep(&self) -> usize {
        let mut state = self.lock();
        let now = Instant::now();
        let gc_time = self.settings.gc_time;
        let CacheState { entries, inflight } = &mut *state;

        let before = entries.len();
        entries.retain(|key, entry| {
            inflight.contains_key(key) || now.duration_since(entry.last_access) < gc_time
        });
        let evicted = before - entries.len();
        if evicted > 0 {
            info!(evicted, remaining = entries.len(), "Evicted idle cache entries");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let cache = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                cache.sweep();
            }
        })
    }
}

fn lock_state<K, V>(state: &Mutex<CacheState<K, V>>) -> MutexGuard<'_, CacheState<K, V>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn retry_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt))
        .min(MAX_RETRY_DELAY)
}

async fn fetch_with_retry<K, V, F, Fut>(
    key: &K,
    fetch: &F,
    settings: CacheSettings,
) -> Result<V, CacheError>
where
    K: Debug,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<V, SourceError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match fetch().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < settings.retries => {
                let delay = retry_delay(settings.retry_base_delay, attempt);
                attempt += 1;
                warn!(?key, attempt, error = %err, ?delay, "Fetch failed, retrying");
                tokio::time::sleep(delay).await;
            }
            Err(err) => {
                tracing::error!(?key, attempts = attempt + 1, error = %err, "Fetch failed");
                return Err(CacheError::Exhausted {
                    attempts: attempt + 1,
                    source: err,
                });
            }
        }
    }
}
