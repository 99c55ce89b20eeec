//! Glyph sets for the text renderers.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode { Self::Unicode } else { Self::Ascii }
    }
}

// ─── Glyphs ──────────────────────────────────────────────────────────────────

/// Characters used for bars, step markers and tree branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub bar: char,
    pub gutter: char,
    pub mark_sorted: &'static str,
    pub mark_swapping: &'static str,
    pub mark_comparing: &'static str,
    pub branch_left: char,  // ┌ corner above a left child
    pub branch_right: char, // ┐ corner above a right child
    pub branch_both: char,  // ┴ parent with two children
    pub branch_only: char,  // ┘ parent with a left child only
    pub horizontal: char,
}

impl Glyphs {
    pub fn unicode() -> Self {
        Self {
            bar: '█',
            gutter: '│',
            mark_sorted: "✓ sorted",
            mark_swapping: "⇄ swapping",
            mark_comparing: "? comparing",
            branch_left: '┌',
            branch_right: '┐',
            branch_both: '┴',
            branch_only: '┘',
            horizontal: '─',
        }
    }

    pub fn ascii() -> Self {
        Self {
            bar: '#',
            gutter: '|',
            mark_sorted: "* sorted",
            mark_swapping: "<> swapping",
            mark_comparing: "? comparing",
            branch_left: '+',
            branch_right: '+',
            branch_both: '+',
            branch_only: '+',
            horizontal: '-',
        }
    }

    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self::unicode(),
            CharSet::Ascii => Self::ascii(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_default_is_unicode() {
        assert_eq!(CharSet::default(), CharSet::Unicode);
    }

    #[test]
    fn test_from_unicode_flag() {
        assert_eq!(CharSet::from_unicode_flag(true), CharSet::Unicode);
        assert_eq!(CharSet::from_unicode_flag(false), CharSet::Ascii);
    }

    #[test]
    fn test_ascii_glyphs_are_ascii() {
        let g = Glyphs::for_charset(CharSet::Ascii);
        for c in [g.bar, g.gutter, g.branch_left, g.branch_both, g.horizontal] {
            assert!(c.is_ascii());
        }
        assert!(g.mark_sorted.is_ascii());
        assert!(g.mark_swapping.is_ascii());
    }
}
