//! Testing utilities for Ride.
//!
//! Shared recorders that make it easy to observe the order and number of
//! calls going through decorated methods.
//!
//! # Features
//!
//! - [`CallLog`]: An append-only log shared between clones
//! - [`CallCounter`]: A call counter shared between clones

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// An append-only log shared between all of its clones.
///
/// Stays usable after a recorded method panics, so it can be inspected from
/// tests that catch the unwind.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let task = Task::new(log.clone());
///
/// task.invoke(RUN, (42,))?;
///
/// assert_eq!(log.entries(), vec![("original", 42)]);
/// ```
pub struct CallLog<E> {
    entries: Arc<Mutex<Vec<E>>>,
}

impl<E> CallLog<E> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append an entry.
    pub fn record(&self, entry: E) {
        self.lock().push(entry);
    }

    /// Get the number of recorded entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Clone> CallLog<E> {
    /// Get a clone of the recorded entries.
    pub fn entries(&self) -> Vec<E> {
        self.lock().clone()
    }
}

impl<E> Default for CallLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for CallLog<E> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for CallLog<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.lock().iter()).finish()
    }
}

// ============================================================================
// Call Counter
// ============================================================================

/// Counts calls. Clones share the same count.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CallCounter::new();
/// slot.ride(before(counter.behavior::<Task, (i32,)>()));
///
/// slot.call(&task, (42,));
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CallCounter {
    count: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a new counter.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Count one call.
    pub fn hit(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }

    /// An extra behavior for `after`/`before` that counts each call.
    pub fn behavior<T, A>(&self) -> impl Fn(&T, &A) + Send + Sync + use<T, A>
    where
        T: ?Sized + 'static,
        A: 'static,
    {
        let counter = self.clone();
        move |_: &T, _: &A| counter.hit()
    }
}

impl Default for CallCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CallCounter {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}
