//! Per-message request pipeline.
//!
//! One linear flow per inbound message:
//!   classify → status message → extract → own the file → size gate
//!   → upload → delete status → cleanup (always)
//!
//! Exactly one status message is created and edited in place; it is deleted
//! only when the video was delivered. Every branch ends in exactly one
//! `PipelineOutcome`, and no error escapes `RequestPipeline::handle`.

use std::path::Path;

use crate::core::error::AppResult;
use crate::core::validation::is_supported;
use crate::download::artifact::ManagedArtifact;
use crate::download::downloader::{DownloadResult, Downloader};
use crate::download::gate::{self, MAX_UPLOAD_BYTES};
use crate::telegram::messages;
use crate::telegram::transport::{ChatTransport, StatusMessage};

/// One inbound message as the pipeline sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub raw_url: String,
    pub requester_id: i64,
    pub requester_display_name: String,
}

impl DownloadRequest {
    pub fn new(raw_url: impl Into<String>, requester_id: i64, requester_display_name: impl Into<String>) -> Self {
        Self {
            raw_url: raw_url.into(),
            requester_id,
            requester_display_name: requester_display_name.into(),
        }
    }
}

/// Final user-visible state of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Delivered,
    RejectedNotAUrl,
    DownloadFailed(String),
    FileMissingAfterDownload,
    TooLarge { actual: u64, max: u64 },
    DeliveryError(String),
}

impl PipelineOutcome {
    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            PipelineOutcome::Delivered => "delivered",
            PipelineOutcome::RejectedNotAUrl => "rejected_not_a_url",
            PipelineOutcome::DownloadFailed(_) => "download_failed",
            PipelineOutcome::FileMissingAfterDownload => "file_missing",
            PipelineOutcome::TooLarge { .. } => "too_large",
            PipelineOutcome::DeliveryError(_) => "delivery_error",
        }
    }
}

/// Progress of a request. Moves forward only; `Rejected` and `Failed` are
/// terminal exits from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Received,
    Classified,
    Downloading,
    Downloaded,
    SizeChecked,
    Delivering,
    Done,
    Rejected,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Rejected | PipelineState::Failed)
    }
}

/// Logs state transitions for one request.
struct StateTracker {
    requester_id: i64,
    state: PipelineState,
}

impl StateTracker {
    fn new(requester_id: i64) -> Self {
        Self {
            requester_id,
            state: PipelineState::Received,
        }
    }

    fn advance(&mut self, next: PipelineState) {
        debug_assert!(!self.state.is_terminal(), "transition out of terminal state {:?}", self.state);
        log::debug!("Request from {}: {:?} -> {:?}", self.requester_id, self.state, next);
        self.state = next;
    }

    /// Exit to `Failed`; a request that already failed stays failed.
    fn fail(&mut self) {
        if self.state != PipelineState::Failed {
            self.advance(PipelineState::Failed);
        }
    }
}

/// Orchestrates classifier, downloader, artifact scope and size gate.
#[derive(Clone)]
pub struct RequestPipeline {
    downloader: Downloader,
}

impl RequestPipeline {
    pub fn new(downloader: Downloader) -> Self {
        Self { downloader }
    }

    /// Runs one request to completion and reports what the user saw.
    pub async fn handle<T>(&self, transport: &T, request: &DownloadRequest) -> PipelineOutcome
    where
        T: ChatTransport + ?Sized,
    {
        log::info!(
            "Message from {} (ID: {}): {}",
            request.requester_display_name,
            request.requester_id,
            request.raw_url
        );
        let mut state = StateTracker::new(request.requester_id);

        if !is_supported(&request.raw_url) {
            state.advance(PipelineState::Rejected);
            if let Err(e) = transport.reply_text(messages::NOT_INSTAGRAM_URL).await {
                log::error!("Failed to send rejection to user {}: {}", request.requester_id, e);
            }
            return PipelineOutcome::RejectedNotAUrl;
        }
        state.advance(PipelineState::Classified);

        let status = match transport.reply_text(messages::DOWNLOADING).await {
            Ok(status) => status,
            Err(e) => {
                log::error!("Failed to send status message to user {}: {:?}", request.requester_id, e);
                state.fail();
                return PipelineOutcome::DeliveryError(e.to_string());
            }
        };
        state.advance(PipelineState::Downloading);

        let (artifact_path, title) = match self
            .downloader
            .download(&request.raw_url, request.requester_id)
            .await
        {
            DownloadResult::Success { artifact_path, title } => (artifact_path, title),
            DownloadResult::Failure { reason } => {
                state.fail();
                if let Err(e) = transport.edit_text(&status, &messages::download_failed(&reason)).await {
                    log::error!("Failed to report download error to user {}: {}", request.requester_id, e);
                }
                return PipelineOutcome::DownloadFailed(reason);
            }
        };
        state.advance(PipelineState::Downloaded);

        let artifact = ManagedArtifact::new(Some(artifact_path.clone()));
        let delivered = self
            .deliver(transport, &status, request, &artifact_path, &title, &mut state)
            .await;
        // The file goes away before anything else is reported.
        artifact.cleanup_async().await;

        match delivered {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!(
                    "Error processing message from {} (ID: {}): {:?}",
                    request.requester_display_name,
                    request.requester_id,
                    e
                );
                state.fail();
                if let Err(edit_err) = transport.edit_text(&status, messages::PROCESSING_ERROR).await {
                    log::error!("Failed to report processing error to user {}: {}", request.requester_id, edit_err);
                }
                PipelineOutcome::DeliveryError(e.to_string())
            }
        }
    }

    /// Body of the artifact scope. Any `Err` here becomes `DeliveryError`.
    async fn deliver<T>(
        &self,
        transport: &T,
        status: &StatusMessage,
        request: &DownloadRequest,
        path: &Path,
        title: &str,
        state: &mut StateTracker,
    ) -> AppResult<PipelineOutcome>
    where
        T: ChatTransport + ?Sized,
    {
        let exists = tokio::fs::try_exists(path).await.map_err(|e| {
            log::error!(
                "Failed to check downloaded file {} for user {}: {}",
                path.display(),
                request.requester_id,
                e
            );
            e
        })?;
        if !exists {
            log::error!(
                "Extractor reported success for user {} but {} does not exist",
                request.requester_id,
                path.display()
            );
            state.fail();
            transport.edit_text(status, messages::FILE_MISSING).await?;
            return Ok(PipelineOutcome::FileMissingAfterDownload);
        }

        let size = tokio::fs::metadata(path).await?.len();
        if let Err(rejection) = gate::enforce(size, MAX_UPLOAD_BYTES) {
            log::warn!("Video for user {} rejected: {}", request.requester_id, rejection);
            state.fail();
            transport.edit_text(status, &messages::too_large(&rejection)).await?;
            return Ok(PipelineOutcome::TooLarge {
                actual: rejection.actual,
                max: rejection.max,
            });
        }
        state.advance(PipelineState::SizeChecked);

        transport.edit_text(status, messages::UPLOADING).await?;
        state.advance(PipelineState::Delivering);

        let caption = messages::video_caption(title, &request.raw_url);
        transport.send_video(path, &caption).await?;
        transport.delete_message(status).await?;
        state.advance(PipelineState::Done);

        log::info!("Video delivered to user {}", request.requester_id);
        Ok(PipelineOutcome::Delivered)
    }
}
