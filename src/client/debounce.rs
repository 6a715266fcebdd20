use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use tokio::{
    task::JoinHandle,
    time::{sleep, Duration},
};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Runs a task only after `quiet` passes with no newer call. Superseded
/// calls are dropped while they wait; a task that already started runs to
/// completion.
#[derive(Clone)]
pub struct Debouncer {
    quiet: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Debouncer {
            quiet,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The handle resolves to `true` if the task ran.
    pub fn call<F>(&self, task: F) -> JoinHandle<bool>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = self.generation.clone();
        let quiet = self.quiet;

        tokio::spawn(async move {
            sleep(quiet).await;
            if generation.load(Ordering::SeqCst) != ticket {
                tracing::trace!(ticket, "Debounced call superseded");
                return false;
            }
            task.await;
            true
        })
    }
}
