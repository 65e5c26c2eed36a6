//! Document-wide side effects suspended while a picker is armed.
//!
//! Arming hides body overflow (which locks scrolling) and switches the cursor
//! to a crosshair. The prior overflow mode is captured into a
//! [`SavedDocumentStyle`] and written back verbatim on exit; the cursor is
//! always reset to [`Cursor::Default`].

use crate::document::{Cursor, Document, Overflow};

/// Snapshot of the body overflow mode taken when a picker arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedDocumentStyle {
    overflow: Option<Overflow>,
}

impl SavedDocumentStyle {
    pub fn capture(doc: &Document) -> Self {
        Self {
            overflow: doc.body_style().overflow,
        }
    }

    /// The overflow mode that will be restored (`None` = unset).
    pub fn overflow(&self) -> Option<Overflow> {
        self.overflow
    }

    /// Write the snapshot back and reset the cursor.
    pub fn restore(self, doc: &mut Document) {
        let body = doc.body_style_mut();
        body.overflow = self.overflow;
        body.cursor = Cursor::Default;
    }
}

/// Apply the picking overrides: crosshair cursor, scrolling suspended.
pub fn suspend(doc: &mut Document) {
    let body = doc.body_style_mut();
    body.overflow = Some(Overflow::Hidden);
    body.cursor = Cursor::Crosshair;
}

/// Restore a snapshot if one was taken. Without a snapshot nothing changes.
pub fn restore(saved: Option<SavedDocumentStyle>, doc: &mut Document) {
    if let Some(saved) = saved {
        saved.restore(doc);
    }
}
