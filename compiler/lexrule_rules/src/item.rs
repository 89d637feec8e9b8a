//! Item tree produced by the rule parser.
//!
//! Items form a directly owned tree: a `Group` owns its children, and the
//! parser addresses "the current item" by its index in the owning vector.

use std::fmt::{self, Write as _};

use lexrule_core::CharCode;

use crate::{CharSet, ItemFlags};

/// What an item matches.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind<C: CharCode> {
    /// `"..."`: a fixed, non-empty code sequence.
    Literal(Vec<C>),
    /// `[...]`: one code out of a non-empty set.
    CharClass(CharSet),
    /// `(...)`: a non-empty sequence of items.
    Group(Vec<Item<C>>),
    /// `'...'`: the name this rule's token is known by.
    Nonterminal(String),
}

/// One matchable unit of a rule, with its modifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item<C: CharCode> {
    pub kind: ItemKind<C>,
    pub flags: ItemFlags,
    /// Repetition count, set together with [`ItemFlags::FIXED_COUNT`].
    pub count: Option<u32>,
}

impl<C: CharCode> Item<C> {
    pub fn new(kind: ItemKind<C>) -> Self {
        Item {
            kind,
            flags: ItemFlags::empty(),
            count: None,
        }
    }

    pub fn nonterminal(name: String) -> Self {
        Item {
            kind: ItemKind::Nonterminal(name),
            flags: ItemFlags::IS_NONTERMINAL,
            count: None,
        }
    }

    #[inline]
    pub fn is_nonterminal(&self) -> bool {
        self.flags.contains(ItemFlags::IS_NONTERMINAL)
    }

    /// Children of a group; empty for every other kind.
    pub fn children(&self) -> &[Item<C>] {
        match &self.kind {
            ItemKind::Group(children) => children,
            _ => &[],
        }
    }

    /// Minimum and maximum number of repetitions (`None` = unbounded).
    pub fn bounds(&self) -> (u32, Option<u32>) {
        let flags = self.flags;
        if flags.contains(ItemFlags::STAR) {
            (0, None)
        } else if flags.contains(ItemFlags::PLUS) {
            (1, None)
        } else if flags.contains(ItemFlags::QUESTION) {
            (0, Some(1))
        } else if flags.contains(ItemFlags::FIXED_COUNT) {
            let n = self.count.unwrap_or(1);
            (n, Some(n))
        } else {
            (1, Some(1))
        }
    }
}

/// Renders the item back in rule syntax.
impl<C: CharCode> fmt::Display for Item<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ItemKind::Literal(codes) => {
                f.write_char('"')?;
                for code in codes {
                    write_code::<C>(f, code.to_u32(), &['"'])?;
                }
                f.write_char('"')?;
            }
            ItemKind::CharClass(set) => {
                f.write_char('[')?;
                for (start, end) in set.ranges() {
                    write_code::<C>(f, start, &['[', ']', '-'])?;
                    if end > start {
                        if end > start + 1 {
                            f.write_char('-')?;
                        }
                        write_code::<C>(f, end, &['[', ']', '-'])?;
                    }
                }
                f.write_char(']')?;
            }
            ItemKind::Group(children) => {
                f.write_char('(')?;
                for child in children {
                    write!(f, "{child}")?;
                }
                f.write_char(')')?;
            }
            ItemKind::Nonterminal(name) => write!(f, "'{name}'")?,
        }

        match self.flags.repetition_symbol() {
            Some('{') => write!(f, "{{{}}}", self.count.unwrap_or(1))?,
            Some(symbol) => f.write_char(symbol)?,
            None => {}
        }
        if self.flags.contains(ItemFlags::PREFIX) {
            f.write_char('p')?;
        }
        if self.flags.contains(ItemFlags::REVERSE) {
            f.write_char('r')?;
        }
        Ok(())
    }
}

/// Write one code, escaped so it reads back as the same code.
fn write_code<C: CharCode>(f: &mut fmt::Formatter<'_>, code: u32, quoted: &[char]) -> fmt::Result {
    match char::from_u32(code) {
        Some(c) if quoted.contains(&c) || c == '\\' => write!(f, "\\x{code:02X}"),
        Some('\n') => f.write_str("\\n"),
        Some('\t') => f.write_str("\\t"),
        Some('\r') => f.write_str("\\r"),
        Some(c) if c == ' ' || c.is_ascii_graphic() => f.write_char(c),
        Some(c) if C::BITS > 8 && !c.is_control() && !c.is_ascii() => f.write_char(c),
        _ if code <= 0xFF => write!(f, "\\x{code:02X}"),
        _ => write!(f, "\\u{code:04X}"),
    }
}

#[cfg(test)]
mod tests;
