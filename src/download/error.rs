use std::fmt;

/// Structured error type for the extraction engine boundary.
///
/// The `Display` output is the bare message so that engine-reported reasons
/// reach the user verbatim.
#[derive(Debug)]
pub enum ExtractionError {
    /// The engine ran and reported a failure (private account, removed
    /// post, photo-only post, network error, bad URL)
    Engine(String),
    /// The engine binary could not be started
    Spawn(String),
    /// The engine claimed success but its report could not be parsed
    Output(String),
    /// The blocking worker running the engine panicked or was cancelled
    Worker(String),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ExtractionError {}

impl ExtractionError {
    /// Returns subcategory for logs
    pub fn subcategory(&self) -> &'static str {
        match self {
            ExtractionError::Engine(_) => "engine",
            ExtractionError::Spawn(_) => "spawn",
            ExtractionError::Output(_) => "output",
            ExtractionError::Worker(_) => "worker",
        }
    }

    fn message(&self) -> &str {
        match self {
            ExtractionError::Engine(msg)
            | ExtractionError::Spawn(msg)
            | ExtractionError::Output(msg)
            | ExtractionError::Worker(msg) => msg,
        }
    }
}

impl From<tokio::task::JoinError> for ExtractionError {
    fn from(err: tokio::task::JoinError) -> Self {
        ExtractionError::Worker(format!("Task join error: {}", err))
    }
}
