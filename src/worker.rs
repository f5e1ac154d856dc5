//! The serialized shadow worker.
//!
//! One background thread consumes jobs in strict FIFO order, so at most one
//! shadow computation runs at a time and completions are delivered in
//! submission order. Finished rasters travel back over a completion channel;
//! the owning context's event loop receives them and applies the attachment,
//! guarded by an explicit liveness token. There is no mid-computation
//! cancellation: a revoked token only discards the finished result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;

use crate::effects::gaussian::GaussianBlurKernel;
use crate::foundation::core::{ElementId, Raster};
use crate::foundation::error::{UmbraError, UmbraResult};
use crate::render::render_shadow;
use crate::spec::{MarginCompensation, ShadowSpec, ShadowStrategy};

/// Explicit liveness flag for an owning UI context.
///
/// Clone the token into each job; revoke it when the context is torn down.
/// Completions for revoked tokens are silently dropped.
#[derive(Clone, Debug, Default)]
pub struct LivenessToken {
    revoked: Arc<AtomicBool>,
}

impl LivenessToken {
    /// A live token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning context as torn down.
    pub fn revoke(&self) {
        self.revoked.store(true, Ordering::SeqCst);
    }

    /// Return `true` while the owning context is alive.
    pub fn is_live(&self) -> bool {
        !self.revoked.load(Ordering::SeqCst)
    }
}

/// One unit of background work: everything the worker needs, owned.
pub struct ShadowJob {
    /// Element the finished raster belongs to.
    pub element: ElementId,
    /// Source raster, exclusively owned by this job.
    pub source: Raster,
    /// The shadow request.
    pub spec: ShadowSpec,
    /// Strategy to run.
    pub strategy: ShadowStrategy,
    /// External Gaussian kernel, when the strategy needs one.
    pub gaussian: Option<Arc<dyn GaussianBlurKernel>>,
    /// Margin compensation to apply on attachment.
    pub margins: Option<MarginCompensation>,
    /// Liveness of the owning context.
    pub token: LivenessToken,
}

/// A finished shadow computation, ready to be applied on the owner's side.
pub struct CompletedShadow {
    /// Element the raster belongs to.
    pub element: ElementId,
    /// The composited raster, or the error the job ended with.
    pub result: UmbraResult<Raster>,
    /// The spec the job ran with (offsets drive padding adjustment).
    pub spec: ShadowSpec,
    /// Margin compensation requested at submission.
    pub margins: Option<MarginCompensation>,
    token: LivenessToken,
}

impl CompletedShadow {
    /// Return `true` when the owning context died before completion; stale
    /// completions must be discarded without side effects.
    pub fn is_stale(&self) -> bool {
        !self.token.is_live()
    }
}

/// Handle to the serialized background worker.
///
/// Dropping the handle closes the job channel; the thread drains whatever is
/// queued and exits.
pub struct ShadowWorker {
    tx: Option<mpsc::Sender<ShadowJob>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ShadowWorker {
    /// Spawn the worker thread. Returns the handle plus the completion
    /// receiver for the owner's event loop.
    pub fn spawn() -> UmbraResult<(Self, mpsc::Receiver<CompletedShadow>)> {
        let (job_tx, job_rx) = mpsc::channel::<ShadowJob>();
        let (done_tx, done_rx) = mpsc::channel::<CompletedShadow>();
        let handle = thread::Builder::new()
            .name("umbra-shadow-worker".into())
            .spawn(move || worker_loop(job_rx, done_tx))
            .map_err(|e| UmbraError::Other(e.into()))?;
        Ok((
            Self {
                tx: Some(job_tx),
                handle: Some(handle),
            },
            done_rx,
        ))
    }

    /// Enqueue a job. Jobs complete in submission order.
    pub fn submit(&self, job: ShadowJob) -> UmbraResult<()> {
        let tx = self
            .tx
            .as_ref()
            .ok_or_else(|| UmbraError::validation("shadow worker is shut down"))?;
        tx.send(job)
            .map_err(|_| UmbraError::validation("shadow worker is shut down"))
    }
}

impl Drop for ShadowWorker {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[tracing::instrument(skip_all)]
fn worker_loop(jobs: mpsc::Receiver<ShadowJob>, done: mpsc::Sender<CompletedShadow>) {
    while let Ok(job) = jobs.recv() {
        tracing::debug!(element = job.element.0, "shadow job start");
        let result = render_shadow(&job.source, &job.spec, job.strategy, job.gaussian.as_deref());
        let completed = CompletedShadow {
            element: job.element,
            result,
            spec: job.spec,
            margins: job.margins,
            token: job.token,
        };
        if done.send(completed).is_err() {
            // Receiver side is gone; nothing left to deliver to.
            break;
        }
    }
}
