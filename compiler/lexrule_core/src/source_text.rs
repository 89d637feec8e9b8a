//! Owned, encoded source buffer.

use std::sync::Arc;

use crate::{CharCode, Location, TextCursor};

/// Source text encoded as codes of one width, plus the name used in
/// diagnostics.
///
/// The buffer is immutable once built, so any number of cursors (and forks
/// of them) can borrow it at once, from any thread.
#[derive(Clone, Debug)]
pub struct SourceText<C: CharCode> {
    codes: Vec<C>,
    filename: Arc<str>,
}

impl<C: CharCode> SourceText<C> {
    /// Encode `text` with the default filename.
    pub fn new(text: &str) -> Self {
        Self::with_filename(text, Location::DEFAULT_FILENAME)
    }

    pub fn with_filename(text: &str, filename: impl Into<Arc<str>>) -> Self {
        SourceText {
            codes: C::encode(text),
            filename: filename.into(),
        }
    }

    /// Wrap already-encoded codes.
    pub fn from_codes(codes: Vec<C>, filename: impl Into<Arc<str>>) -> Self {
        SourceText {
            codes,
            filename: filename.into(),
        }
    }

    pub fn codes(&self) -> &[C] {
        &self.codes
    }

    pub fn filename(&self) -> &Arc<str> {
        &self.filename
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// A cursor positioned before the first character.
    pub fn cursor(&self) -> TextCursor<'_, C> {
        TextCursor::new(&self.codes, Arc::clone(&self.filename))
    }
}
