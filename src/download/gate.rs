//! Size gate in front of the upload.
//!
//! The standard Bot API refuses uploads above 50 MiB; checking locally lets
//! us tell the user the exact figures instead of failing mid-transfer.

use std::fmt;

use crate::core::config;
use crate::core::utils::bytes_to_mib;

/// Upload ceiling for bot accounts (50 MiB).
pub const MAX_UPLOAD_BYTES: u64 = config::validation::MAX_UPLOAD_BYTES;

/// Returns false iff `size_bytes` exceeds `max_bytes`. Equal sizes pass.
pub fn check(size_bytes: u64, max_bytes: u64) -> bool {
    size_bytes <= max_bytes
}

/// An artifact that did not pass the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRejection {
    pub actual: u64,
    pub max: u64,
}

impl SizeRejection {
    /// Actual size in MiB with one decimal, e.g. `60.0 МБ`.
    pub fn actual_display(&self) -> String {
        format!("{:.1} МБ", bytes_to_mib(self.actual))
    }

    /// Ceiling in whole MiB, e.g. `50 МБ`.
    pub fn max_display(&self) -> String {
        format!("{:.0} МБ", bytes_to_mib(self.max))
    }
}

impl fmt::Display for SizeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exceeds {}", self.actual_display(), self.max_display())
    }
}

impl std::error::Error for SizeRejection {}

/// `check` with the figures attached on rejection.
pub fn enforce(size_bytes: u64, max_bytes: u64) -> Result<(), SizeRejection> {
    if check(size_bytes, max_bytes) {
        Ok(())
    } else {
        Err(SizeRejection {
            actual: size_bytes,
            max: max_bytes,
        })
    }
}
