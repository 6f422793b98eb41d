//! Singleton
//!
//! One process-wide value, computed on first access and handed out from a
//! cache afterwards. A refresh forces the computation to run again.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

pub struct CachedResource<T> {
    slot: Mutex<Option<T>>,
    load: fn() -> T,
    loads: AtomicUsize,
}

impl<T: Clone> CachedResource<T> {
    pub const fn new(load: fn() -> T) -> Self {
        CachedResource {
            slot: Mutex::new(None),
            load,
            loads: AtomicUsize::new(0),
        }
    }

    /// Returns the cached value, loading it first if the cache is empty or
    /// `refresh` is set. The lock is held while loading, so concurrent
    /// callers never trigger a second load.
    pub fn get(&self, refresh: bool) -> T {
        // A panic inside `load` leaves the slot untouched, so the data is still valid.
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(value) if !refresh => {
                debug!("serving cached resource");
                value.clone()
            }
            _ => {
                self.loads.fetch_add(1, Ordering::Relaxed);
                let value = (self.load)();
                *slot = Some(value.clone());
                value
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

/// Stand-in for a slow computation: picks 1..=5 and takes that many tens
/// of milliseconds to do it.
fn do_something() -> u64 {
    let cost = rand::thread_rng().gen_range(1..=5);
    thread::sleep(Duration::from_millis(cost * 10));
    info!(cost, "expensive resource computed");
    cost
}

static EXPENSIVE: CachedResource<u64> = CachedResource::new(do_something);

pub fn expensive_value(refresh: bool) -> u64 {
    EXPENSIVE.get(refresh)
}

pub fn expensive_resource() -> &'static CachedResource<u64> {
    &EXPENSIVE
}
