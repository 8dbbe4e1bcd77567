//! Trailing-edge debouncer
//!
//! A [`Debounced`] wrapper owns at most one scheduled execution. Every call
//! cancels the one still waiting and schedules a fresh one `delay` after the
//! call, carrying that call's arguments. Only the last call of a burst ever
//! reaches the callback.

use crate::config::DebounceConfig;
use crate::error::DebounceError;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

type Callback<A> = dyn Fn(A) + Send + Sync;

/// Wrap `callback` so that calls within `delay_ms` of each other collapse
/// into a single trailing call with the latest arguments
///
/// Uses the tokio runtime the caller is running on. Fails only when there is
/// none.
///
/// ```no_run
/// # async fn demo() -> Result<(), frontkit_debounce::DebounceError> {
/// let search = frontkit_debounce::debounce(|query: String| println!("search {query}"), 250)?;
/// search.call("r".to_string());
/// search.call("ru".to_string());
/// search.call("rust".to_string()); // only this one is searched
/// # Ok(())
/// # }
/// ```
pub fn debounce<A, R, F>(callback: F, delay_ms: u64) -> Result<Debounced<A>, DebounceError>
where
    A: Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    let handle = Handle::try_current().map_err(|_| DebounceError::NoRuntime)?;
    Ok(Debounced::with_handle(
        handle,
        callback,
        Duration::from_millis(delay_ms),
    ))
}

/// Debounced wrapper around a callback
///
/// Clones share one timer slot. Dropping the last clone cancels whatever is
/// still scheduled.
pub struct Debounced<A> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    callback: Box<Callback<A>>,
    delay: Duration,
    handle: Handle,
    slot: Mutex<Slot>,
}

#[derive(Default)]
struct Slot {
    /// Bumped for every scheduled execution
    generation: u64,
    pending: Option<Pending>,
}

struct Pending {
    generation: u64,
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl Pending {
    fn cancel(self) {
        self.cancelled.store(true, Ordering::Release);
        self.task.abort();
    }
}

impl<A: Send + 'static> Debounced<A> {
    /// Create a wrapper scheduling on an explicit runtime handle
    pub fn with_handle<R, F>(handle: Handle, callback: F, delay: Duration) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let callback: Box<Callback<A>> = Box::new(move |args| {
            // Fire-and-forget: the callback's result never reaches the caller
            let _ = callback(args);
        });

        Self {
            inner: Arc::new(Inner {
                callback,
                delay,
                handle,
                slot: Mutex::new(Slot::default()),
            }),
        }
    }

    /// Create a wrapper using the delay from `config` on the current runtime
    pub fn from_config<R, F>(callback: F, config: &DebounceConfig) -> Result<Self, DebounceError>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let handle = Handle::try_current().map_err(|_| DebounceError::NoRuntime)?;
        Ok(Self::with_handle(handle, callback, config.delay()))
    }

    /// Request a call with `args`
    ///
    /// Cancels the execution still waiting from an earlier call (if any) and
    /// schedules the callback to run `delay` from now. Never blocks and never
    /// fails.
    pub fn call(&self, args: A) {
        let deadline = Instant::now() + self.inner.delay;

        // Held across spawn so the new task cannot observe the slot before
        // it has been recorded there.
        let mut slot = self.inner.slot.lock();

        // Anything still in the slot has not fired yet, even if its deadline
        // passed; `fire_at` checks the flag under this lock.
        if let Some(prev) = slot.pending.take() {
            debug!(generation = prev.generation, "Cancelling pending debounced call");
            prev.cancel();
        }

        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;
        let cancelled = Arc::new(AtomicBool::new(false));

        let weak = Arc::downgrade(&self.inner);
        let task = self.inner.handle.spawn(fire_at(
            weak,
            deadline,
            generation,
            Arc::clone(&cancelled),
            args,
        ));

        debug!(generation, delay = ?self.inner.delay, "Scheduled debounced call");
        slot.pending = Some(Pending {
            generation,
            cancelled,
            task,
        });
    }

    /// Whether a scheduled execution is still waiting for its deadline
    pub fn is_pending(&self) -> bool {
        self.inner.slot.lock().pending.is_some()
    }

    /// Quiet window applied to each call
    pub fn delay(&self) -> Duration {
        self.inner.delay
    }
}

async fn fire_at<A>(
    inner: Weak<Inner<A>>,
    deadline: Instant,
    generation: u64,
    cancelled: Arc<AtomicBool>,
    args: A,
) {
    tokio::time::sleep_until(deadline).await;

    // Owner dropped before the deadline
    let Some(inner) = inner.upgrade() else {
        return;
    };

    {
        let mut slot = inner.slot.lock();
        if cancelled.load(Ordering::Acquire) {
            return;
        }
        if slot
            .pending
            .as_ref()
            .is_some_and(|pending| pending.generation == generation)
        {
            slot.pending = None;
        }
    }

    trace!(generation, "Firing debounced call");
    (inner.callback)(args);
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.inner.delay)
            .field("pending", &self.inner.slot.lock().pending.is_some())
            .finish()
    }
}

impl<A> Drop for Inner<A> {
    fn drop(&mut self) {
        if let Some(pending) = self.slot.get_mut().pending.take() {
            debug!(generation = pending.generation, "Debouncer dropped, cancelling pending call");
            pending.cancel();
        }
    }
}
