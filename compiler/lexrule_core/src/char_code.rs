//! Fixed-width character codes.
//!
//! A [`CharCode`] is one unit of the alphabet a cursor walks over. Code `0`
//! is the end-of-input sentinel for every width, and codes in `(EOF, SPACE]`
//! are layout.

use std::fmt::Debug;
use std::hash::Hash;

/// One character code of a fixed-width alphabet.
///
/// Implemented for `u8` (UTF-8 bytes), `u16` (UTF-16 units), `u32` and
/// `char` (Unicode scalar values).
pub trait CharCode: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Bit width of the code; the alphabet holds `2^BITS` codes.
    const BITS: u32;
    /// End-of-input sentinel (code `0`).
    const EOF: Self;
    /// The space character, upper bound of the layout range.
    const SPACE: Self;

    /// Numeric value of the code.
    fn to_u32(self) -> u32;

    /// Build a code from a numeric value, `None` if it does not fit the width.
    fn from_u32(value: u32) -> Option<Self>;

    /// Encode UTF-8 text into codes of this width.
    fn encode(text: &str) -> Vec<Self>;

    /// Render codes back to text for diagnostics (lossy).
    fn render(codes: &[Self]) -> String;

    /// Build a code from an ASCII byte. ASCII fits every width.
    #[inline]
    fn from_ascii(byte: u8) -> Self {
        Self::from_u32(u32::from(byte)).unwrap_or(Self::EOF)
    }

    /// Number of codes in the alphabet.
    #[inline]
    fn alphabet_size() -> u64 {
        1u64 << Self::BITS
    }

    #[inline]
    fn is_eof(self) -> bool {
        self == Self::EOF
    }

    /// Layout codes are everything in `(EOF, SPACE]`.
    #[inline]
    fn is_layout(self) -> bool {
        self > Self::EOF && self <= Self::SPACE
    }

    /// Tab or space, the codes tracked as trailing layout.
    #[inline]
    fn is_blank(self) -> bool {
        self == Self::SPACE || self.to_u32() == u32::from(b'\t')
    }

    #[inline]
    fn is_newline(self) -> bool {
        self.to_u32() == u32::from(b'\n')
    }

    /// `true` if this code is the given ASCII byte.
    #[inline]
    fn is(self, byte: u8) -> bool {
        self.to_u32() == u32::from(byte)
    }
}

impl CharCode for u8 {
    const BITS: u32 = 8;
    const EOF: Self = 0;
    const SPACE: Self = b' ';

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32(value: u32) -> Option<Self> {
        u8::try_from(value).ok()
    }

    fn encode(text: &str) -> Vec<Self> {
        text.as_bytes().to_vec()
    }

    fn render(codes: &[Self]) -> String {
        String::from_utf8_lossy(codes).into_owned()
    }
}

impl CharCode for u16 {
    const BITS: u32 = 16;
    const EOF: Self = 0;
    const SPACE: Self = 0x20;

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32(value: u32) -> Option<Self> {
        u16::try_from(value).ok()
    }

    fn encode(text: &str) -> Vec<Self> {
        text.encode_utf16().collect()
    }

    fn render(codes: &[Self]) -> String {
        String::from_utf16_lossy(codes)
    }
}

impl CharCode for u32 {
    const BITS: u32 = 32;
    const EOF: Self = 0;
    const SPACE: Self = 0x20;

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }

    #[inline]
    fn from_u32(value: u32) -> Option<Self> {
        Some(value)
    }

    fn encode(text: &str) -> Vec<Self> {
        text.chars().map(u32::from).collect()
    }

    fn render(codes: &[Self]) -> String {
        codes
            .iter()
            .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl CharCode for char {
    /// Unicode scalar values need 21 bits.
    const BITS: u32 = 21;
    const EOF: Self = '\0';
    const SPACE: Self = ' ';

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32(value: u32) -> Option<Self> {
        char::from_u32(value)
    }

    fn encode(text: &str) -> Vec<Self> {
        text.chars().collect()
    }

    fn render(codes: &[Self]) -> String {
        codes.iter().collect()
    }
}
