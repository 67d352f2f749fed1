use std::{path::PathBuf, sync::Arc};

use tokio::sync::mpsc;

use crate::upload::{
    dependencies::UploadDependencies,
    pipeline::perform_upload,
    types::{UploadError, UploadId, UploadOutcome, UploadRequest},
};

/// Bridges async image decoding with the synchronous pad session.
///
/// A dispatcher task receives requests and spawns one independent task per
/// request, so uploads are neither serialized nor cancelled. Outcomes arrive
/// in completion order; the session applies them in that order, which makes
/// the last decode to finish the one that sticks.
pub struct UploadManager {
    /// Channel for sending upload requests.
    request_tx: mpsc::UnboundedSender<UploadRequest>,
    /// Outcomes in completion order.
    outcome_rx: mpsc::UnboundedReceiver<UploadOutcome>,
    /// Requests sent whose outcome has not been taken yet.
    pending: usize,
    next_id: UploadId,
}

impl UploadManager {
    /// Create a new upload manager reading files from disk.
    ///
    /// # Arguments
    /// * `runtime_handle` - Tokio runtime handle for spawning async tasks
    pub fn new(runtime_handle: &tokio::runtime::Handle) -> Self {
        Self::with_dependencies(runtime_handle, UploadDependencies::default())
    }

    /// Create an upload manager with custom dependencies (useful for testing).
    pub fn with_dependencies(
        runtime_handle: &tokio::runtime::Handle,
        dependencies: UploadDependencies,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<UploadRequest>();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<UploadOutcome>();
        let dependencies = Arc::new(dependencies);
        let spawner = runtime_handle.clone();

        runtime_handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                let deps = Arc::clone(&dependencies);
                let tx = outcome_tx.clone();
                spawner.spawn(async move {
                    let outcome = perform_upload(request, deps).await;
                    if tx.send(outcome).is_err() {
                        log::debug!("Upload finished after the pad session closed");
                    }
                });
            }
        });

        Self {
            request_tx,
            outcome_rx,
            pending: 0,
            next_id: 1,
        }
    }

    /// Request an upload of the file at `path`.
    ///
    /// Non-blocking; the read and decode happen in the background. The same
    /// path may be requested any number of times.
    pub fn request_upload(&mut self, path: impl Into<PathBuf>) -> Result<UploadId, UploadError> {
        let id = self.next_id;
        let request = UploadRequest {
            id,
            path: path.into(),
        };
        log::debug!("Queueing upload #{id}: {}", request.path.display());

        self.request_tx
            .send(request)
            .map_err(|_| UploadError::NotRunning)?;

        self.next_id += 1;
        self.pending += 1;
        Ok(id)
    }

    /// Number of requests whose outcome has not been taken.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Takes the next finished outcome without waiting.
    pub fn try_take_outcome(&mut self) -> Option<UploadOutcome> {
        let outcome = self.outcome_rx.try_recv().ok()?;
        self.pending = self.pending.saturating_sub(1);
        Some(outcome)
    }

    /// Blocks until the next outcome arrives.
    ///
    /// Returns `None` immediately when nothing is pending. Must not be called
    /// from inside the tokio runtime.
    pub fn wait_for_outcome(&mut self) -> Option<UploadOutcome> {
        if self.pending == 0 {
            return None;
        }
        let outcome = self.outcome_rx.blocking_recv()?;
        self.pending = self.pending.saturating_sub(1);
        Some(outcome)
    }
}

#[cfg(test)]
impl UploadManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<UploadRequest>();
        drop(rx);
        let (_outcome_tx, outcome_rx) = mpsc::unbounded_channel::<UploadOutcome>();
        Self {
            request_tx: tx,
            outcome_rx,
            pending: 0,
            next_id: 1,
        }
    }
}
