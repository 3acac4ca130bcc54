//! Error type for print operations.
//!
//! Rendering itself cannot fail: every value lowers to some text, and opaque
//! values get a diagnostic placeholder. The only failures come from the
//! output sink.

use thiserror::Error;

/// Error returned by [`Printer::print`](crate::Printer::print) and
/// [`pformat`](crate::pformat).
#[derive(Debug, Error)]
pub enum PrintError {
    /// The output sink rejected a write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An in-memory sink produced bytes that were not valid UTF-8.
    #[error("rendered output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
