//! Line-tracking cursor over a borrowed code buffer.
//!
//! The cursor starts *before* the first character; the first advance lands
//! on it. Reading past the end yields the [`CharCode::EOF`] sentinel, and a
//! cursor sitting on EOF never moves again. An interior `0` code reads as
//! EOF as well.
//!
//! # Views
//!
//! A cursor sees the window `start..end` of the root buffer. [`fork`]
//! narrows the window for a nested scan; lookahead stops at the window, but
//! [`current_line`] always reports the full source line so nested
//! diagnostics still show the surrounding text.
//!
//! [`fork`]: TextCursor::fork
//! [`current_line`]: TextCursor::current_line

use std::sync::Arc;

use crate::{CharCode, CursorError, ErrorSite, Location, ScanError};

/// How a scan moves from one character to the next.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Advance {
    /// Every character, layout included.
    #[default]
    Raw,
    /// Skip layout codes (`(EOF, SPACE]`).
    Clean,
}

/// Cursor over source text that tracks line, column and indentation.
///
/// Cloning is cheap apart from the trailing layout run; a clone (or a
/// [`fork`](Self::fork)) shares no mutable state with its parent.
#[derive(Clone, Debug)]
pub struct TextCursor<'a, C: CharCode> {
    /// Root buffer; the view is `src[start..end]`.
    src: &'a [C],
    start: usize,
    end: usize,
    /// Index into `src` of the current character, once `started`.
    pos: usize,
    started: bool,
    location: Location,
    /// Run of tabs/spaces directly preceding the current character.
    trailing_layout: Vec<C>,
    /// Index into `src` where the current line begins.
    line_start: usize,
}

impl<'a, C: CharCode> TextCursor<'a, C> {
    /// Cursor over the whole of `src`, before its first character.
    pub fn new(src: &'a [C], filename: Arc<str>) -> Self {
        TextCursor {
            src,
            start: 0,
            end: src.len(),
            pos: 0,
            started: false,
            location: Location::start(filename),
            trailing_layout: Vec::new(),
            line_start: 0,
        }
    }

    /// Whether at least one character has been read.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[inline]
    pub fn trailing_layout(&self) -> &[C] {
        &self.trailing_layout
    }

    /// Index of the current character within this cursor's view.
    ///
    /// Zero before the first advance.
    #[inline]
    pub fn position(&self) -> usize {
        if self.started {
            self.pos - self.start
        } else {
            0
        }
    }

    #[inline]
    fn code_at(&self, index: usize) -> C {
        if index >= self.start && index < self.end {
            self.src[index]
        } else {
            C::EOF
        }
    }

    #[inline]
    fn current(&self) -> C {
        if self.started {
            self.code_at(self.pos)
        } else {
            C::EOF
        }
    }

    /// `true` once the cursor sits on the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.started && self.current().is_eof()
    }

    /// Non-advancing lookahead (or look-behind for negative `offset`).
    ///
    /// Returns EOF before the first advance, and for any index outside the
    /// cursor's view.
    pub fn current_char(&self, offset: isize) -> C {
        if !self.started {
            return C::EOF;
        }
        match self.pos.checked_add_signed(offset) {
            Some(index) => self.code_at(index),
            None => C::EOF,
        }
    }

    /// Advance by one character, whatever it is, and return the new current
    /// character. On EOF, returns EOF without moving.
    pub fn raw_char(&mut self) -> C {
        if !self.started {
            self.started = true;
            self.pos = self.start;
            self.location.step(false);
            return self.current();
        }

        let left = self.current();
        if left.is_eof() {
            return C::EOF;
        }

        if left.is_newline() {
            self.line_start = self.pos + 1;
            self.trailing_layout.clear();
        } else if left.is_blank() {
            self.trailing_layout.push(left);
        } else {
            self.trailing_layout.clear();
        }

        self.pos += 1;
        self.location.step(left.is_newline());
        self.current()
    }

    /// Advance past any layout and return the first non-layout character
    /// (or EOF).
    pub fn clean_char(&mut self) -> C {
        loop {
            let c = self.raw_char();
            if !c.is_layout() {
                return c;
            }
        }
    }

    /// Advance once using the given mode.
    #[inline]
    pub fn advance(&mut self, mode: Advance) -> C {
        match mode {
            Advance::Raw => self.raw_char(),
            Advance::Clean => self.clean_char(),
        }
    }

    /// Advance `n` times using the given mode.
    pub fn skip(&mut self, n: usize, mode: Advance) -> C {
        let mut last = self.current();
        for _ in 0..n {
            last = self.advance(mode);
        }
        last
    }

    /// The unconsumed remainder of the view, current character included.
    pub fn rest_of_text(&self) -> &'a [C] {
        let from = if self.started { self.pos } else { self.start };
        &self.src[from.min(self.end)..self.end]
    }

    /// Whether the remaining text starts with `needle`.
    pub fn starts_with(&self, needle: &[C]) -> bool {
        self.started && !needle.is_empty() && self.rest_of_text().starts_with(needle)
    }

    /// The full source line holding the current character, without its
    /// newline.
    pub fn current_line(&self) -> &'a [C] {
        let line_start = self.line_start.min(self.src.len());
        let rest = &self.src[line_start..];
        let len = rest
            .iter()
            .position(|c| c.is_newline())
            .unwrap_or(rest.len());
        &rest[..len]
    }

    /// Independent cursor over `rest[from..to]`, where `rest` starts at the
    /// current character (or at the view start before the first advance).
    ///
    /// The fork is already positioned on its first character, with the
    /// location that character has here; an empty fork sits on EOF.
    pub fn fork(&self, from: usize, to: usize) -> Result<Self, ScanError> {
        let base = if self.started { self.pos } else { self.start };
        let remaining = self.end.saturating_sub(base);
        if from > to {
            return Err(ScanError::at(CursorError::InvertedFork { from, to }, self));
        }
        if to > remaining {
            return Err(ScanError::at(
                CursorError::ForkOutOfBounds {
                    from,
                    to,
                    remaining,
                },
                self,
            ));
        }

        let target = base + from;
        let mut sub = self.clone();
        if !sub.started {
            sub.raw_char();
        }
        while sub.pos < target {
            sub.raw_char();
            if sub.current().is_eof() {
                break;
            }
        }
        sub.pos = target;
        sub.start = target;
        sub.end = base + to;
        Ok(sub)
    }

    /// Snapshot of the cursor for an error report.
    pub fn snapshot(&self) -> ErrorSite {
        let line = self.current_line();
        let line_start = self.line_start.min(self.src.len());
        let upto = if self.started {
            (self.pos - line_start.min(self.pos)).min(line.len())
        } else {
            0
        };
        ErrorSite {
            location: self.location.clone(),
            line: C::render(line),
            index: C::render(&line[..upto]).chars().count(),
            trailing_layout: C::render(&self.trailing_layout),
        }
    }
}
