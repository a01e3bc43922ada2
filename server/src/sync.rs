//! Background sync jobs.
//!
//! `POST /api/sync` must answer immediately, so the handler only enqueues a
//! job on a bounded [`SyncQueue`]. A single worker task drains the queue,
//! running jobs one at a time and logging each outcome. Every submission
//! returns a [`SyncHandle`] that can be awaited for the result; the HTTP
//! handler drops it, tests keep it.
//!
//! On shutdown the owner calls [`SyncWorker::shutdown`]: once every
//! [`SyncQueue`] clone is gone the worker drains what is left and exits, and
//! anything still running after the grace period is aborted.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

/// A failed sync run.
#[derive(Debug, Clone, Error)]
pub enum SyncError {
    #[error("sync failed: {0}")]
    Failed(String),
    /// The worker exited before reporting a result.
    #[error("sync worker stopped before the job finished")]
    WorkerGone,
}

/// Why a job could not be enqueued.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("sync queue is full")]
    QueueFull,
    #[error("sync queue is closed")]
    Closed,
}

/// The unit of work a sync run performs.
pub trait SyncJob: Send + Sync + 'static {
    fn run(&self) -> BoxFuture<'_, Result<(), SyncError>>;
}

/// Placeholder sync until supplier inventory sync is wired in.
pub struct PlaceholderSync;

impl SyncJob for PlaceholderSync {
    fn run(&self) -> BoxFuture<'_, Result<(), SyncError>> {
        Box::pin(async {
            info!("Running sync logic...");
            Ok(())
        })
    }
}

struct QueuedJob {
    id: Uuid,
    done: oneshot::Sender<Result<(), SyncError>>,
}

/// Submission side of the queue. Cheap to clone.
#[derive(Clone)]
pub struct SyncQueue {
    tx: mpsc::Sender<QueuedJob>,
}

/// Completion handle for one submitted job.
pub struct SyncHandle {
    pub id: Uuid,
    done: oneshot::Receiver<Result<(), SyncError>>,
}

impl SyncHandle {
    /// Wait for the job to finish.
    pub async fn wait(self) -> Result<(), SyncError> {
        self.done.await.unwrap_or(Err(SyncError::WorkerGone))
    }
}

/// Owner of the worker task.
pub struct SyncWorker {
    task: JoinHandle<()>,
}

impl SyncQueue {
    /// Spawn the worker and return the submission side plus its owner.
    pub fn start(capacity: usize, job: Arc<dyn SyncJob>) -> (Self, SyncWorker) {
        let (tx, mut rx) = mpsc::channel::<QueuedJob>(capacity.max(1));

        let task = tokio::spawn(async move {
            while let Some(queued) = rx.recv().await {
                let result = job.run().await;
                match &result {
                    Ok(()) => info!(job_id = %queued.id, "Sync job finished"),
                    Err(e) => error!(job_id = %queued.id, "Sync job failed: {e}"),
                }
                // Submitter may have dropped its handle.
                let _ = queued.done.send(result);
            }
        });

        (Self { tx }, SyncWorker { task })
    }

    /// Enqueue a sync run without waiting for it.
    pub fn submit(&self) -> Result<SyncHandle, SubmitError> {
        let id = Uuid::new_v4();
        let (done_tx, done_rx) = oneshot::channel();
        self.tx
            .try_send(QueuedJob { id, done: done_tx })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => SubmitError::QueueFull,
                mpsc::error::TrySendError::Closed(_) => SubmitError::Closed,
            })?;
        info!(job_id = %id, "Sync job queued");
        Ok(SyncHandle { id, done: done_rx })
    }
}

impl SyncWorker {
    /// Wait up to `grace` for the worker to drain, then abort it.
    ///
    /// The worker only finishes once every [`SyncQueue`] clone is dropped, so
    /// call this after the server (and its state) has gone away.
    pub async fn shutdown(self, grace: Duration) {
        let abort = self.task.abort_handle();
        match tokio::time::timeout(grace, self.task).await {
            Ok(Ok(())) => info!("Sync worker drained"),
            Ok(Err(e)) => error!("Sync worker panicked: {e}"),
            Err(_) => {
                warn!("Sync worker still busy after {grace:?}, aborting");
                abort.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Counting(AtomicUsize);

    impl SyncJob for Counting {
        fn run(&self) -> BoxFuture<'_, Result<(), SyncError>> {
            Box::pin(async move {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        }
    }

    struct Failing;

    impl SyncJob for Failing {
        fn run(&self) -> BoxFuture<'_, Result<(), SyncError>> {
            Box::pin(async { Err(SyncError::Failed("supplier feed unreachable".into())) })
        }
    }

    /// Blocks until the test releases it.
    struct Gated(tokio::sync::Semaphore);

    impl SyncJob for Gated {
        fn run(&self) -> BoxFuture<'_, Result<(), SyncError>> {
            Box::pin(async move {
                let _permit = self
                    .0
                    .acquire()
                    .await
                    .map_err(|e| SyncError::Failed(e.to_string()))?;
                Ok(())
            })
        }
    }

    #[tokio::test]
    async fn submitted_jobs_run_and_report() {
        let job = Arc::new(Counting(AtomicUsize::new(0)));
        let (queue, _worker) = SyncQueue::start(4, job.clone());

        let first = queue.submit().unwrap();
        let second = queue.submit().unwrap();
        assert_ne!(first.id, second.id);

        first.wait().await.unwrap();
        second.wait().await.unwrap();
        assert_eq!(job.0.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_reach_the_handle() {
        let (queue, _worker) = SyncQueue::start(1, Arc::new(Failing));
        let err = queue.submit().unwrap().wait().await.unwrap_err();
        assert!(matches!(err, SyncError::Failed(ref m) if m.contains("unreachable")));
    }

    #[tokio::test]
    async fn full_queue_rejects_submission() {
        let job = Arc::new(Gated(tokio::sync::Semaphore::new(0)));
        let (queue, _worker) = SyncQueue::start(1, job.clone());

        // The first job is taken by the worker and parks on the semaphore,
        // the second fills the single slot.
        let running = queue.submit().unwrap();
        tokio::task::yield_now().await;
        let mut queued = Vec::new();
        let rejected = loop {
            match queue.submit() {
                Ok(h) => queued.push(h),
                Err(e) => break e,
            }
        };
        assert!(matches!(rejected, SubmitError::QueueFull));

        job.0.add_permits(16);
        running.wait().await.unwrap();
        for h in queued {
            h.wait().await.unwrap();
        }
    }

    #[tokio::test]
    async fn shutdown_drains_after_queue_dropped() {
        let job = Arc::new(Counting(AtomicUsize::new(0)));
        let (queue, worker) = SyncQueue::start(4, job.clone());
        let handle = queue.submit().unwrap();
        drop(queue);

        worker.shutdown(Duration::from_secs(5)).await;
        handle.wait().await.unwrap();
        assert_eq!(job.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn shutdown_aborts_stuck_job() {
        let job = Arc::new(Gated(tokio::sync::Semaphore::new(0)));
        let (queue, worker) = SyncQueue::start(1, job);
        let handle = queue.submit().unwrap();
        drop(queue);

        worker.shutdown(Duration::from_millis(50)).await;
        assert!(matches!(handle.wait().await, Err(SyncError::WorkerGone)));
    }
}
