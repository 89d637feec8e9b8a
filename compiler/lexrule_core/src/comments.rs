//! Comment detection and skipping.
//!
//! Comments are configured by delimiter strings; an absent delimiter
//! disables that comment form. A line comment runs through the next
//! newline (or EOF). A block comment runs through its closing delimiter and
//! does not nest.

use tracing::trace;

use crate::{Advance, CharCode, CommentError, ScanError, TextCursor};

/// Comment delimiters as text, independent of character width.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CommentDelimiters {
    /// Opens a comment that runs to the end of the line, e.g. `//`.
    pub line: Option<String>,
    /// Opening and closing delimiters of a block comment, e.g. `/*` `*/`.
    pub block: Option<(String, String)>,
}

impl CommentDelimiters {
    /// No comments at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// `//` line comments and `/* */` block comments.
    pub fn c_style() -> Self {
        CommentDelimiters {
            line: Some("//".to_owned()),
            block: Some(("/*".to_owned(), "*/".to_owned())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.block.is_none()
    }
}

/// Comment delimiters encoded for one character width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentSkipper<C: CharCode> {
    line: Option<Vec<C>>,
    block: Option<(Vec<C>, Vec<C>)>,
}

impl<C: CharCode> CommentSkipper<C> {
    /// Encode the delimiters. Empty delimiter strings count as absent.
    pub fn new(delimiters: &CommentDelimiters) -> Self {
        let encode = |s: &str| Some(C::encode(s)).filter(|codes| !codes.is_empty());
        CommentSkipper {
            line: delimiters.line.as_deref().and_then(encode),
            block: delimiters
                .block
                .as_ref()
                .and_then(|(open, close)| Some((encode(open)?, encode(close)?))),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.line.is_some() || self.block.is_some()
    }

    /// Skip a comment starting at the current character, if there is one.
    ///
    /// Returns `true` if a comment was consumed; the cursor then sits on the
    /// first character after it. When both forms match, the block form
    /// wins if its opener is at least as long.
    pub fn skip_if_present(&self, cursor: &mut TextCursor<'_, C>) -> Result<bool, ScanError> {
        let line_len = self
            .line
            .as_deref()
            .filter(|open| cursor.starts_with(open))
            .map(<[C]>::len);
        let block = self
            .block
            .as_ref()
            .filter(|(open, _)| cursor.starts_with(open));

        match (line_len, block) {
            (Some(len), Some((open, close))) if open.len() >= len => {
                Self::skip_block(cursor, open.len(), close)?;
            }
            (Some(len), _) => Self::skip_line(cursor, len),
            (None, Some((open, close))) => Self::skip_block(cursor, open.len(), close)?,
            (None, None) => return Ok(false),
        }
        Ok(true)
    }

    /// Skip consecutive comments; returns how many were skipped.
    pub fn skip_all(&self, cursor: &mut TextCursor<'_, C>) -> Result<usize, ScanError> {
        let mut count = 0;
        while self.skip_if_present(cursor)? {
            count += 1;
        }
        Ok(count)
    }

    fn skip_line(cursor: &mut TextCursor<'_, C>, open_len: usize) {
        trace!(line = cursor.location().line, "line comment");
        let mut c = cursor.skip(open_len, Advance::Raw);
        while !c.is_eof() && !c.is_newline() {
            c = cursor.raw_char();
        }
        if c.is_newline() {
            cursor.raw_char();
        }
    }

    fn skip_block(
        cursor: &mut TextCursor<'_, C>,
        open_len: usize,
        close: &[C],
    ) -> Result<(), ScanError> {
        trace!(line = cursor.location().line, "block comment");
        cursor.skip(open_len, Advance::Raw);
        let mut length = 0usize;
        loop {
            if cursor.is_eof() {
                let close = C::render(close);
                return Err(ScanError::at(CommentError::Unterminated { close }, cursor));
            }
            if cursor.starts_with(close) {
                cursor.skip(close.len(), Advance::Raw);
                trace!(length, "block comment closed");
                return Ok(());
            }
            cursor.raw_char();
            length += 1;
        }
    }
}
