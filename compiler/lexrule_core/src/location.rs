//! Line/column position of a cursor.

use std::fmt;
use std::sync::Arc;

/// Position of the character under a cursor.
///
/// A fresh cursor sits before the first character: `line = 1`,
/// `column = 0`, `offset = 0`. Each advance bumps `offset` by exactly one
/// and the character landed on gets the next column, or column 1 of the
/// next line when the character left behind was a newline. `offset` is
/// therefore the number of characters consumed so far.
///
/// Locations are plain values: once copied into an error they never change.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: u64,
    pub column: u64,
    pub offset: u64,
    pub filename: Arc<str>,
}

impl Location {
    /// Filename used when a source has none.
    pub const DEFAULT_FILENAME: &'static str = "<input>";

    /// Location of a cursor that has not read anything yet.
    pub fn start(filename: Arc<str>) -> Self {
        Location {
            line: 1,
            column: 0,
            offset: 0,
            filename,
        }
    }

    /// Step onto the next character, `left_newline` telling whether the
    /// character being left was `\n`.
    #[inline]
    pub(crate) fn step(&mut self, left_newline: bool) {
        self.offset += 1;
        if left_newline {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::start(Arc::from(Self::DEFAULT_FILENAME))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}
