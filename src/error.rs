//! # Error Types
//!
//! This module defines error types used throughout the cebra library.
//!
//! Recoverable input problems (wrong-length EAN-13/UPC-A data) are not
//! errors; they surface as [`Outcome::Warning`](crate::barcode::Outcome)
//! values. Everything here is a fault that propagates to the caller.

use thiserror::Error;

use crate::barcode::checksum::ChecksumError;
use crate::render::RenderError;

/// Main error type for cebra operations
#[derive(Debug, Error)]
pub enum CebraError {
    /// A render collaborator failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Checksum arithmetic was handed non-digit data
    #[error("Checksum error: {0}")]
    Checksum(#[from] ChecksumError),

    /// A spawned generation task died before producing a result
    #[error("Task error: {0}")]
    Task(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server-level error (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
