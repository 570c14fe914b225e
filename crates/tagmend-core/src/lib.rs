//! # tagmend-core - Core Domain Types
//!
//! Foundation crate for tagmend. Provides the correction domain model, the
//! activity log, preview document composition, error handling, and logging
//! setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Corrections (`correction`)
//! - [`Correction`] - One line's before/after/explanation record
//! - [`CorrectionSet`] - The full HTML+CSS correction result for one request
//!
//! ### Activity Log (`activity`)
//! - [`ActivityEntry`] - A single timestamped audit message
//! - [`ActivityLog`] - Newest-first, unbounded log of workflow transitions
//!
//! ### Preview (`document`)
//! - [`compose_document()`] - Combine HTML+CSS into one isolated document
//! - [`flatten_markup()`] - Plain-text rendering of markup for the preview pane
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tagmend_core::prelude::*;
//! ```

pub mod activity;
pub mod correction;
pub mod document;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all tagmend crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use activity::{ActivityEntry, ActivityLog};
pub use correction::{Correction, CorrectionSet};
pub use document::{compose_document, flatten_markup};
pub use error::{Error, Result};
