//! Session report export
//!
//! Wraps a session summary with generation metadata and serializes it to
//! pretty JSON for external consumption.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::summary::Summary;

/// Default output path for the session report.
pub const DEFAULT_REPORT_PATH: &str = "summary_report.json";

/// A session summary ready to be written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub version: String,
    /// Generation time, RFC 3339
    pub generated_at: String,
    #[serde(flatten)]
    pub summary: Summary,
}

impl SessionReport {
    /// Build a report stamped with the current time.
    pub fn new(summary: Summary) -> Self {
        Self {
            version: crate::VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            summary,
        }
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Write the report to a file path.
    pub fn write_to_file(&self, path: &str) -> std::io::Result<()> {
        std::fs::write(path, self.to_json())
    }
}
