//! Admission control for imposition jobs
//!
//! Two-stage gate: a bounded waiting room (counted semaphore, non-blocking
//! acquire) in front of a render lock (strictly one imposition at a time,
//! protecting the rendering backend). A request that finds the waiting
//! room full is rejected immediately rather than queued.

use std::future::Future;
use tokio::sync::{Mutex, Semaphore};

/// The waiting room is full; the request must be rejected, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateFull;

pub struct JobGate {
    waiting: Semaphore,
    render: Mutex<()>,
}

impl JobGate {
    /// Create a gate admitting at most `waiting_room` concurrent requests,
    /// of which one renders at a time.
    pub fn new(waiting_room: usize) -> Self {
        Self {
            waiting: Semaphore::new(waiting_room),
            render: Mutex::new(()),
        }
    }

    /// Run a job through the gate.
    ///
    /// Holds a waiting-room slot for the whole call and the render lock
    /// while the job runs. Both are released when this returns, success
    /// or failure, before the caller can build its response.
    pub async fn run<T, Fut>(&self, job: impl FnOnce() -> Fut) -> Result<T, GateFull>
    where
        Fut: Future<Output = T>,
    {
        let _slot = self.waiting.try_acquire().map_err(|_| GateFull)?;
        let _render = self.render.lock().await;
        Ok(job().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_full_waiting_room_rejects_immediately() {
        let gate = Arc::new(JobGate::new(1));
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();
        let (started_tx, started_rx) = tokio::sync::oneshot::channel::<()>();

        let occupant = {
            let gate = gate.clone();
            tokio::spawn(async move {
                gate.run(|| async {
                    started_tx.send(()).unwrap();
                    release_rx.await.unwrap();
                })
                .await
            })
        };

        // Wait until the first job holds the only slot.
        started_rx.await.unwrap();

        // The second request is turned away without waiting.
        assert_eq!(gate.run(|| async {}).await, Err(GateFull));

        release_tx.send(()).unwrap();
        occupant.await.unwrap().unwrap();

        // The slot came back after the job finished.
        assert_eq!(gate.run(|| async { 7 }).await, Ok(7));
    }

    #[tokio::test]
    async fn test_render_stage_is_single_flight() {
        let gate = Arc::new(JobGate::new(4));
        let running = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let gate = gate.clone();
            let running = running.clone();
            handles.push(tokio::spawn(async move {
                gate.run(|| async {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    assert_eq!(now, 1, "two jobs rendered at once");
                    tokio::task::yield_now().await;
                    running.fetch_sub(1, Ordering::SeqCst);
                })
                .await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
    }

    #[tokio::test]
    async fn test_slot_released_on_job_panic_path() {
        // A failing job must still return its waiting-room slot.
        let gate = JobGate::new(1);

        let result: Result<Result<(), &str>, GateFull> = gate.run(|| async { Err("boom") }).await;
        assert_eq!(result, Ok(Err("boom")));

        assert_eq!(gate.run(|| async { 1 }).await, Ok(1));
    }
}
