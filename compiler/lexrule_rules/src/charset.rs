//! Growable membership bitmap for character classes.
//!
//! Words grow up to the highest member, so a class over `u8` codes costs at
//! most four words and a class over `char` codes only pays for the range
//! it touches. Members are bounded by the alphabet of the code type that
//! produced them.

use std::fmt;

const WORD_BITS: u32 = u64::BITS;

/// Set of character codes.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSet {
    words: Vec<u64>,
    len: usize,
}

#[inline]
fn split(code: u32) -> (usize, u32) {
    ((code / WORD_BITS) as usize, code % WORD_BITS)
}

impl CharSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn grow_to(&mut self, word: usize) {
        if self.words.len() <= word {
            self.words.resize(word + 1, 0);
        }
    }

    /// Add `code`; returns `false` if it was already a member.
    pub fn insert(&mut self, code: u32) -> bool {
        let (word, bit) = split(code);
        self.grow_to(word);
        let mask = 1u64 << bit;
        let fresh = self.words[word] & mask == 0;
        if fresh {
            self.words[word] |= mask;
            self.len += 1;
        }
        fresh
    }

    /// Add every code in `start..=end`. A descending range adds nothing.
    pub fn insert_range(&mut self, start: u32, end: u32) {
        if start > end {
            return;
        }
        let (first, lo_bit) = split(start);
        let (last, hi_bit) = split(end);
        self.grow_to(last);
        for word in first..=last {
            let lo = if word == first { lo_bit } else { 0 };
            let hi = if word == last { hi_bit } else { WORD_BITS - 1 };
            let mask = (u64::MAX >> (WORD_BITS - 1 - (hi - lo))) << lo;
            self.words[word] |= mask;
        }
        self.len = self.words.iter().map(|w| w.count_ones() as usize).sum();
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool {
        let (word, bit) = split(code);
        self.words
            .get(word)
            .is_some_and(|w| w & (1u64 << bit) != 0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending order.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "word index is bounded by u32::MAX / 64"
    )]
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.words.iter().enumerate().flat_map(|(index, &word)| {
            let base = index as u32 * WORD_BITS;
            (0..WORD_BITS)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| base + bit)
        })
    }

    /// Members folded into inclusive `(start, end)` runs.
    pub fn ranges(&self) -> Vec<(u32, u32)> {
        let mut ranges: Vec<(u32, u32)> = Vec::new();
        for code in self.iter() {
            match ranges.last_mut() {
                Some((_, end)) if *end + 1 == code => *end = code,
                _ => ranges.push((code, code)),
            }
        }
        ranges
    }
}

impl FromIterator<u32> for CharSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = CharSet::new();
        for code in iter {
            set.insert(code);
        }
        set
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.ranges().into_iter().map(|(start, end)| start..=end))
            .finish()
    }
}
