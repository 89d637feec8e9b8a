//! Reduced single-line excerpts for caret diagnostics.

use lexrule_core::ErrorSite;

/// Characters kept on each side of the error before the excerpt may be
/// cut at the next layout character.
pub const EXCERPT_RADIUS: usize = 20;

/// A bounded slice of the failing line plus the caret column within it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Excerpt {
    pub text: String,
    /// Character index of the failing character within `text`.
    pub caret: usize,
    /// Padding in front of the caret; tabs of `text` are kept so the caret
    /// lines up under tab-indented source.
    pub indent: String,
}

impl Excerpt {
    /// The caret line: `indent` followed by `^`.
    pub fn caret_line(&self) -> String {
        format!("{}^", self.indent)
    }
}

/// Cut the line of `site` down to the neighbourhood of the error.
///
/// Both boundaries move outward from the error while they are closer than
/// [`EXCERPT_RADIUS`] or still inside a word, so the excerpt never splits
/// a token and stops at the line ends.
pub fn reduce_excerpt(site: &ErrorSite) -> Excerpt {
    let chars: Vec<char> = site.line.chars().collect();
    let at = site.index.min(chars.len());

    let mut left = at;
    while left > 0 && (at - left < EXCERPT_RADIUS || !is_layout(chars[left - 1])) {
        left -= 1;
    }

    let mut right = at;
    while right < chars.len() && (right - at < EXCERPT_RADIUS || !is_layout(chars[right])) {
        right += 1;
    }

    // The blank run right before the error comes from the cursor; the rest
    // of the padding mirrors the excerpt.
    let trailing: Vec<char> = site.trailing_layout.chars().collect();
    let run = trailing.len().min(at - left);
    let mut indent: String = chars[left..at - run]
        .iter()
        .map(|&c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    indent.extend(&trailing[trailing.len() - run..]);

    Excerpt {
        text: chars[left..right].iter().collect(),
        caret: at - left,
        indent,
    }
}

fn is_layout(c: char) -> bool {
    c != '\0' && c <= ' '
}

#[cfg(test)]
mod tests;
