//! Time-based cache with a background sweeper.
//!
//! Entries are stamped when inserted and a dedicated thread removes every
//! entry older than the cache interval once per interval. Reads never look
//! at entry age, so an entry can stay visible for up to one extra interval
//! after it logically expired.

use std::collections::HashMap;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Shortest period the sweeper will tick at.
const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// A cache entry with a timestamp.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    created_at: Instant,
}

type Entries<V> = Arc<RwLock<HashMap<String, CacheEntry<V>>>>;

/// A thread-safe cache with periodic, sweep-based expiration.
///
/// The cache can be cloned cheaply; clones share the same entries and the
/// same sweeper. The sweeper stops when [`TimedCache::stop`] is called or the
/// last clone is dropped.
///
/// # Memory Efficiency with Arc
///
/// `get` hands out clones, so for large values store an `Arc`:
/// ```ignore
/// let cache = TimedCache::<Arc<[u8]>>::new(Duration::from_secs(10));
/// cache.add("https://pokeapi.co/api/v2/pokemon/ditto", Arc::from(payload));
/// let bytes: Option<Arc<[u8]>> = cache.get("https://pokeapi.co/api/v2/pokemon/ditto");
/// ```
#[derive(Clone)]
pub struct TimedCache<V> {
    entries: Entries<V>,
    interval: Duration,
    sweeper: Arc<Sweeper>,
}

impl<V> TimedCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create an empty cache whose entries expire after `interval`.
    ///
    /// The sweeper starts right away on its own thread and ticks every
    /// `interval`.
    pub fn new(interval: Duration) -> Self {
        let entries: Entries<V> = Arc::new(RwLock::new(HashMap::new()));
        let sweeper = Sweeper::spawn(Arc::clone(&entries), interval);

        Self {
            entries,
            interval,
            sweeper: Arc::new(sweeper),
        }
    }

    /// Look up a value.
    ///
    /// Expiry is not checked here; an entry is present until the sweeper
    /// removes it.
    pub fn get(&self, key: &str) -> Option<V> {
        read(&self.entries).get(key).map(|entry| entry.value.clone())
    }

    /// Insert a value, replacing any existing entry and restarting its clock.
    pub fn add(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            created_at: Instant::now(),
        };

        write(&self.entries).insert(key.into(), entry);
    }

    /// Number of entries currently held, including ones awaiting a sweep.
    pub fn len(&self) -> usize {
        read(&self.entries).len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the expiry interval for this cache.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the background sweeper is still running.
    pub fn is_sweeping(&self) -> bool {
        self.sweeper.is_running()
    }

    /// Stop the background sweeper and wait for its thread to exit.
    ///
    /// Stored entries stay readable but will no longer expire. This affects
    /// every clone of the cache.
    pub fn stop(&self) {
        self.sweeper.stop();
    }
}

impl<V> std::fmt::Debug for TimedCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("interval", &self.interval)
            .field("entries", &read(&self.entries).len())
            .finish()
    }
}

// A panic while a guard is held cannot leave the map half-updated, so a
// poisoned lock is safe to keep using.
fn read<V>(entries: &Entries<V>) -> RwLockReadGuard<'_, HashMap<String, CacheEntry<V>>> {
    entries.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<V>(entries: &Entries<V>) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry<V>>> {
    entries.write().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to the sweeper thread.
///
/// Dropping the stop sender wakes the thread, which then exits.
struct Sweeper {
    stop_tx: Mutex<Option<Sender<()>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Sweeper {
    fn spawn<V>(entries: Entries<V>, interval: Duration) -> Self
    where
        V: Send + Sync + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let period = interval.max(MIN_SWEEP_PERIOD);

        let spawned = thread::Builder::new()
            .name("timed-cache-sweeper".to_string())
            .spawn(move || {
                let mut next_tick = Instant::now() + period;
                loop {
                    let wait = next_tick.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {}
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }

                    let tick = Instant::now();
                    sweep(&entries, tick, interval);

                    // Missed ticks are dropped rather than replayed back to back.
                    next_tick += period;
                    if next_tick <= tick {
                        next_tick = tick + period;
                    }
                }
                tracing::trace!("Cache sweeper stopped");
            });

        let handle = match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!("Failed to start cache sweeper, entries will not expire: {}", e);
                None
            }
        };

        Self {
            stop_tx: Mutex::new(Some(stop_tx)),
            handle: Mutex::new(handle),
        }
    }

    fn is_running(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn stop(&self) {
        self.stop_tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let handle = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::warn!("Cache sweeper thread panicked");
            }
        }
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Remove every entry older than `interval` as of `tick`.
fn sweep<V>(entries: &Entries<V>, tick: Instant, interval: Duration) {
    let mut entries = write(entries);
    let before = entries.len();

    entries.retain(|_, entry| tick.saturating_duration_since(entry.created_at) <= interval);

    let removed = before - entries.len();
    if removed > 0 {
        tracing::trace!(removed, remaining = entries.len(), "Swept expired cache entries");
    }
}
