//! Quoted literal decoding on top of the scan protocol.

use crate::{
    decode_escape, scan::begin_scanning, CharCode, EscapePair, ScanError, Scanner, StartAction,
    StringError, TextCursor,
};

/// Scanner that decodes a quoted literal into its character codes.
///
/// The cursor must sit on the opening quote; it is left on the closing one.
/// Backslash escapes go through [`decode_escape`], with the quote itself
/// accepted as an escape target.
#[derive(Clone, Debug)]
pub struct StringToCodes<C: CharCode> {
    quote: C,
    extra: Vec<EscapePair<C>>,
    codes: Vec<C>,
}

impl<C: CharCode> StringToCodes<C> {
    pub fn new(quote: C) -> Self {
        StringToCodes {
            quote,
            extra: vec![(quote, quote)],
            codes: Vec::new(),
        }
    }

    /// Accept additional `(trigger, replacement)` escapes.
    #[must_use]
    pub fn with_escapes(mut self, extra: &[EscapePair<C>]) -> Self {
        self.extra.extend_from_slice(extra);
        self
    }

    /// Run the scan and return the decoded codes.
    pub fn scan(mut self, cursor: &mut TextCursor<'_, C>) -> Result<Vec<C>, ScanError> {
        let quote = self.quote;
        begin_scanning(&mut self, cursor, quote)?;
        Ok(self.codes)
    }
}

impl<C: CharCode> Scanner<C> for StringToCodes<C> {
    type Error = ScanError;

    fn on_start(&mut self, cursor: &mut TextCursor<'_, C>) -> Result<StartAction, ScanError> {
        if cursor.current_char(0) == self.quote {
            Ok(StartAction::SkipFirst)
        } else {
            Err(ScanError::at(
                StringError::NotAnOpener {
                    quote: self.quote.to_u32(),
                },
                cursor,
            ))
        }
    }

    fn process_char(&mut self, c: C, cursor: &mut TextCursor<'_, C>) -> Result<(), ScanError> {
        if c.is(b'\\') {
            cursor.raw_char();
            let decoded = decode_escape(cursor, &self.extra)?;
            self.codes.push(decoded);
        } else {
            self.codes.push(c);
        }
        Ok(())
    }

    fn unexpected_eof(&self, cursor: &TextCursor<'_, C>) -> ScanError {
        ScanError::at(
            StringError::Unterminated {
                quote: self.quote.to_u32(),
            },
            cursor,
        )
    }
}

/// Decode the literal quoted by `quote` at the cursor.
pub fn decode_string<C: CharCode>(
    cursor: &mut TextCursor<'_, C>,
    quote: C,
) -> Result<Vec<C>, ScanError> {
    StringToCodes::new(quote).scan(cursor)
}
