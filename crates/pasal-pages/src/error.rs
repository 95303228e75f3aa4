//! # Page Controller Errors
//!
//! The only thing that can fail between a handle and its controller is
//! the channel: a controller that has shut down (or panicked) no longer
//! receives events. Everything else on these pages is deliberately
//! infallible — bad numbers coerce to zero and failed searches are
//! swallowed where they happen.

use thiserror::Error;

/// Errors returned by page handles.
#[derive(Debug, Error)]
pub enum PageError {
    /// The controller task is no longer running.
    ///
    /// ## When This Occurs
    /// - `shutdown()` was already called
    /// - The controller task panicked
    #[error("page controller stopped")]
    ControllerGone,
}

/// Result alias for page handle operations.
pub type PageResult<T> = Result<T, PageError>;
