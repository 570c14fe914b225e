//! # tagmend-client - Collaborator API Client
//!
//! The external AI collaborator consumed by both workflows. Exposes the
//! [`Collaborator`] trait with two request shapes (structured line
//! corrections and free-text Q&A), an HTTP implementation speaking the
//! OpenAI-compatible chat-completions protocol, and a scripted mock for
//! tests.

pub mod http;
pub mod mock;
pub mod wire;

use async_trait::async_trait;
use tagmend_core::{CorrectionSet, Result};

pub use http::HttpCollaborator;
pub use mock::MockCollaborator;

/// The external AI collaborator: a request/response service.
///
/// Both calls are one-shot; serialization (at most one outstanding request
/// per workflow) is the caller's responsibility.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Request a structured correction set for the two code blobs.
    ///
    /// Contract: every line of each input appears exactly once in the
    /// corresponding output sequence, in order, 1-indexed.
    async fn request_corrections(&self, html: &str, css: &str) -> Result<CorrectionSet>;

    /// Ask a free-text question about the two code blobs.
    async fn ask(&self, html: &str, css: &str, question: &str) -> Result<String>;
}
