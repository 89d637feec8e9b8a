//! Per-item modifier flags.

use bitflags::bitflags;

bitflags! {
    /// Modifiers set on an item by the characters following it in a rule.
    ///
    /// At most one repetition bit is set per item.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ItemFlags: u8 {
        // === Repetition (bits 0-3) ===

        /// `*`: zero or more.
        const STAR = 1 << 0;
        /// `+`: one or more.
        const PLUS = 1 << 1;
        /// `?`: zero or one.
        const QUESTION = 1 << 2;
        /// `{n}`: exactly n, count stored on the item.
        const FIXED_COUNT = 1 << 3;

        // === Role (bits 4-6) ===

        /// `p`: item may stand as a prefix/postfix match.
        const PREFIX = 1 << 4;
        /// `r`: item is matched character-reversed.
        const REVERSE = 1 << 5;
        /// Item names a nonterminal.
        const IS_NONTERMINAL = 1 << 6;

        /// Any repetition bit.
        const REPETITION = Self::STAR.bits()
            | Self::PLUS.bits()
            | Self::QUESTION.bits()
            | Self::FIXED_COUNT.bits();
    }
}

impl ItemFlags {
    #[inline]
    pub fn has_repetition(self) -> bool {
        self.intersects(Self::REPETITION)
    }

    /// The DSL suffix for the repetition bit, if any.
    pub fn repetition_symbol(self) -> Option<char> {
        if self.contains(Self::STAR) {
            Some('*')
        } else if self.contains(Self::PLUS) {
            Some('+')
        } else if self.contains(Self::QUESTION) {
            Some('?')
        } else if self.contains(Self::FIXED_COUNT) {
            Some('{')
        } else {
            None
        }
    }
}
