//! Error types for clipforge-av.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or running ffmpeg commands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required external tool is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// Probing failed: unreadable input, tool failure, or no video stream.
    #[error("probe failed for {}: {message}", path.display())]
    Probe { path: PathBuf, message: String },

    /// A probe reported a zero width or height.
    #[error("invalid dimensions {width}x{height} for {}", path.display())]
    InvalidDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// Reserved for strict template resolution. Unbound placeholders are
    /// currently left in the resolved command instead of failing.
    #[error("template error: {0}")]
    Template(String),

    /// The external process exceeded its allotted wall-clock time and was
    /// killed.
    #[error("command timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The process exited zero but the declared output file is missing or
    /// empty.
    #[error("output file missing or empty: {}", path.display())]
    OutputMissing { path: PathBuf },

    /// The process exited with a non-zero status.
    #[error("process exited with code {code}: {stderr}")]
    Process { code: i32, stderr: String },

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a probe error.
    pub fn probe(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Probe {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid dimensions error.
    pub fn invalid_dimensions(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self::InvalidDimensions {
            path: path.into(),
            width,
            height,
        }
    }

    /// Create a process failure error.
    pub fn process(code: i32, stderr: impl Into<String>) -> Self {
        Self::Process {
            code,
            stderr: stderr.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_display() {
        let err = Error::probe("/media/a.mp4", "no video stream");
        assert_eq!(err.to_string(), "probe failed for /media/a.mp4: no video stream");
    }

    #[test]
    fn invalid_dimensions_display() {
        let err = Error::invalid_dimensions("/media/a.mp4", 0, 1080);
        assert_eq!(err.to_string(), "invalid dimensions 0x1080 for /media/a.mp4");
    }

    #[test]
    fn timeout_display() {
        let err = Error::Timeout { seconds: 30 };
        assert_eq!(err.to_string(), "command timed out after 30s");
    }

    #[test]
    fn process_display() {
        let err = Error::process(1, "unknown encoder");
        assert_eq!(err.to_string(), "process exited with code 1: unknown encoder");
    }

    #[test]
    fn io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }
}
