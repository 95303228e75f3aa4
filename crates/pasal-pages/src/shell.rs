//! # Page Shell
//!
//! The three browser primitives the pages use that only the embedder can
//! provide: blocking dialogs and a full page reload. Controllers call
//! through this trait so the delete flow stays testable, and so a
//! desktop shell, a webview, or a test double can each supply their own
//! dialogs.

/// Embedder-provided dialogs and navigation.
///
/// `alert` and `confirm` are synchronous on purpose: the flows that use
/// them block on the user's answer before doing anything else, the same
/// way the browser dialogs block the page.
pub trait PageShell: Send + Sync {
    /// Shows a blocking message dialog.
    fn alert(&self, message: &str);

    /// Asks a yes/no question; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;

    /// Reloads the page, discarding all controller state.
    fn reload(&self);
}
