//! Errors raised by the picker lifecycle.

use thiserror::Error;

use crate::document::ElementId;

/// Error type for picker lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// Another mounted picker is armed on the same document.
    ///
    /// Only one picker may own the document's cursor, scroll mode and
    /// listener registry at a time.
    #[error("document is already being picked by another picker (owner {owner})")]
    DocumentBusy { owner: u64 },

    /// An element handle no longer resolves in the document.
    #[error("element {0:?} is not part of the document")]
    UnknownElement(ElementId),

    /// The picker was used after its overlay was destroyed.
    #[error("picker is not mounted")]
    NotMounted,
}
