//! Debouncing of bursty input.
//!
//! A [`Debouncer`] holds at most one pending task. Scheduling a new task
//! aborts the pending one, so only the last task of a burst runs, once the
//! input has been quiet for the configured delay.

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Quiet window used for search input unless configured otherwise.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `task` after the quiet window, superseding any pending task.
    pub async fn schedule<F, Fut>(&self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                tracing::trace!("Superseding pending debounced task");
            }
            previous.abort();
        }

        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task().await;
        }));
    }

    /// Cancel the pending task. Returns whether one was still waiting.
    pub async fn cancel(&self) -> bool {
        let mut pending = self.pending.lock().await;
        match pending.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub async fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex as StdMutex};

    fn recorder() -> Arc<StdMutex<Vec<String>>> {
        Arc::new(StdMutex::new(Vec::new()))
    }

    async fn schedule_record(debouncer: &Debouncer, log: &Arc<StdMutex<Vec<String>>>, value: &str) {
        let log = log.clone();
        let value = value.to_string();
        debouncer
            .schedule(move || async move {
                log.lock().unwrap().push(value);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_task() {
        let debouncer = Debouncer::default();
        let log = recorder();

        for term in ["r", "ru", "rus", "rust"] {
            schedule_record(&debouncer, &log, term).await;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(*log.lock().unwrap(), vec!["rust".to_string()]);
        assert!(!debouncer.is_pending().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_only_after_quiet_window() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let log = recorder();

        schedule_record(&debouncer, &log, "once").await;
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(log.lock().unwrap().is_empty());
        assert!(debouncer.is_pending().await);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*log.lock().unwrap(), vec!["once".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_events_each_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(50));
        let log = recorder();

        schedule_record(&debouncer, &log, "a").await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        schedule_record(&debouncer, &log, "b").await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(*log.lock().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_task() {
        let debouncer = Debouncer::default();
        let log = recorder();

        schedule_record(&debouncer, &log, "never").await;
        assert!(debouncer.cancel().await);
        assert!(!debouncer.cancel().await);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(log.lock().unwrap().is_empty());
    }
}
