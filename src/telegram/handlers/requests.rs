//! Isolated execution of one pipeline request

use std::sync::Arc;

use crate::download::pipeline::{DownloadRequest, PipelineOutcome, RequestPipeline};
use crate::telegram::messages;
use crate::telegram::transport::ChatTransport;

/// Runs `request` in its own task and waits for it.
///
/// A panic anywhere inside the pipeline is logged and answered with
/// `CRITICAL_ERROR` through the same transport; the dispatcher never sees it.
/// Returns `None` when the task did not complete.
pub async fn run_request<T>(
    pipeline: Arc<RequestPipeline>,
    transport: Arc<T>,
    request: DownloadRequest,
) -> Option<PipelineOutcome>
where
    T: ChatTransport + 'static,
{
    let requester_id = request.requester_id;
    let task_transport = Arc::clone(&transport);
    let task = tokio::spawn(async move { pipeline.handle(task_transport.as_ref(), &request).await });

    match task.await {
        Ok(outcome) => {
            log::info!("Request from {} finished: {}", requester_id, outcome.label());
            Some(outcome)
        }
        Err(e) => {
            log::error!("Critical error while handling message from {}: {}", requester_id, e);
            if let Err(send_err) = transport.reply_text(messages::CRITICAL_ERROR).await {
                log::error!("Failed to send critical error notice to {}: {}", requester_id, send_err);
            }
            None
        }
    }
}
