//! Download engine: extraction, artifact lifecycle, size gate and the
//! per-message request pipeline

pub mod artifact;
pub mod downloader;
pub mod error;
pub mod gate;
pub mod pipeline;
pub mod ytdlp;

// Re-exports for convenience
pub use artifact::ManagedArtifact;
pub use downloader::{ensure_downloads_dir, DownloadResult, Downloader, ExtractedMedia, Extractor, OutputTemplate};
pub use error::ExtractionError;
pub use pipeline::{DownloadRequest, PipelineOutcome, PipelineState, RequestPipeline};
pub use ytdlp::YtDlp;
