//! Scheduled callbacks owned by a screen
//!
//! Every timer a screen starts lives in its `TaskSet`. Dropping the set aborts
//! whatever is still pending, so callbacks never run after teardown.

use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

#[derive(Default)]
pub struct TaskSet {
    tasks: HashMap<&'static str, JoinHandle<()>>,
    queued: Vec<JoinHandle<()>>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` once after `delay`. Replaces any task under the same key.
    ///
    /// Must be called from within a tokio runtime.
    pub fn once<F>(&mut self, key: &'static str, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            f();
        });
        self.insert(key, handle);
    }

    /// Runs `f` once after `delay` without replacing anything already
    /// scheduled. Queued tasks end only by firing or through `cancel_all`.
    pub fn queue<F>(&mut self, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.queued.retain(|h| !h.is_finished());
        self.queued.push(tokio::spawn(async move {
            time::sleep(delay).await;
            f();
        }));
    }

    /// Runs `f` every `period`, first after one full period.
    pub fn every<F>(&mut self, key: &'static str, period: Duration, mut f: F)
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                f();
            }
        });
        self.insert(key, handle);
    }

    pub fn cancel(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
            log::trace!("Cancelled task {}", key);
        }
    }

    pub fn cancel_all(&mut self) {
        for (key, handle) in self.tasks.drain() {
            handle.abort();
            log::trace!("Cancelled task {}", key);
        }
        for handle in self.queued.drain(..) {
            handle.abort();
        }
    }

    /// Whether a task under `key` is scheduled and has not finished.
    pub fn is_pending(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|h| !h.is_finished())
    }

    pub fn pending_count(&self) -> usize {
        self.tasks
            .values()
            .chain(self.queued.iter())
            .filter(|h| !h.is_finished())
            .count()
    }

    fn insert(&mut self, key: &'static str, handle: JoinHandle<()>) {
        if let Some(previous) = self.tasks.insert(key, handle) {
            previous.abort();
        }
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
