//! Display width of text in grid cells.
//!
//! A grid cell holds exactly one single-width character. Text is mapped to cell
//! characters before it is painted: zero-width and control characters are dropped,
//! and a wide character (CJK ideographs, emoji) becomes one placeholder per cell
//! it would cover, so measured width and painted width always agree.

use unicode_width::UnicodeWidthChar;

pub const WIDE_PLACEHOLDER: char = '?';

/// Cells `c` covers in a terminal: 0, 1 or 2.
#[inline]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

#[inline]
pub fn is_single_width(c: char) -> bool {
    c.width() == Some(1)
}

/// Display width of `text` in cells.
pub fn cell_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// The characters `text` paints, one per cell.
pub fn cell_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(|c| {
        let width = char_width(c);
        let ch = if width == 1 { c } else { WIDE_PLACEHOLDER };
        std::iter::repeat(ch).take(width)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_ascii_is_one_cell_per_char() {
        assert_eq!(cell_width("fn main()"), 9);
        assert_eq!(cell_chars("fn main()").collect::<String>(), "fn main()");
    }

    #[test]
    fn test_wide_chars_take_two_cells() {
        assert_eq!(cell_width("漢字"), 4);
        assert_eq!(cell_width("a😀b"), 4);
        assert_eq!(cell_chars("a😀b").collect::<String>(), "a??b");
    }

    #[test]
    fn test_zero_width_and_control_chars_are_dropped() {
        // combining acute accent, zero-width space, tab
        let text = "e\u{301}\u{200B}x\t";
        assert_eq!(cell_width(text), 2);
        assert_eq!(cell_chars(text).collect::<String>(), "ex");
    }

    #[test]
    fn test_cell_chars_render_at_their_count() {
        let painted: String = cell_chars("日本語のタイトル ok").collect();
        assert_eq!(painted.chars().count(), cell_width("日本語のタイトル ok"));
        assert_eq!(painted.width(), painted.chars().count());
        assert!(painted.chars().all(is_single_width));
    }

    #[test]
    fn test_box_drawing_is_single_width() {
        assert!("┌─│┐└┘".chars().all(is_single_width));
    }
}
