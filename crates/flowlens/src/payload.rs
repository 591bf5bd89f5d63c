//! Strict schema for the checker's `--json` diagnostic payload.
//!
//! The external type checker prints one JSON object per invocation:
//!
//! ```json
//! {
//!   "passed": false,
//!   "errors": [
//!     {
//!       "message": [
//!         { "path": "/src/a.js", "line": 3, "start": 5, "endline": 3,
//!           "end": 9, "descr": "number is incompatible with string" },
//!         { "path": "/src/b.js", "line": 1, "start": 14, "endline": 1,
//!           "end": 19, "descr": "declared here" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Each entry of `errors` is one coherent error chain; the first message of a
//! chain is its origin, later ones are supporting context (often in other
//! files). All coordinates are 1-based and inclusive.
//!
//! Decoding goes through this derived schema and nothing else. Anything that
//! does not decode is a [`PayloadError`]; callers treat that as "no
//! diagnostics" rather than a failure, since the checker process is the
//! authority on whether real diagnostics exist.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced when decoding a checker payload.
pub enum PayloadError {
    #[error("JSON decode error: {0}")]
    /// The payload was not well-formed JSON or did not match the schema.
    Json(#[from] serde_json::Error),
}

/// One source span + description reported by the checker.
///
/// Coordinates are exactly as emitted on the wire: 1-based lines and columns,
/// with `end` naming the last column covered (inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawMessage {
    /// Path of the file the message points into.
    pub path: String,
    /// 1-based start line.
    pub line: u32,
    /// 1-based start column.
    pub start: u32,
    /// 1-based end line.
    #[serde(rename = "endline")]
    pub end_line: u32,
    /// 1-based end column (inclusive).
    pub end: u32,
    /// Human-readable description.
    pub descr: String,
}

/// One error chain: the origin message first, then context messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorGroup {
    /// Ordered messages; index 0 is the origin message.
    #[serde(rename = "message")]
    pub messages: Vec<RawMessage>,
}

/// Root payload of one checker invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckPayload {
    /// `true` when the check found nothing to report.
    pub passed: bool,
    /// Error groups; only present when `passed` is false.
    #[serde(default)]
    pub errors: Vec<ErrorGroup>,
}

/// Decode one raw checker payload.
pub fn parse_payload(raw: &str) -> Result<CheckPayload, PayloadError> {
    Ok(serde_json::from_str(raw)?)
}
