//! Text re-flow for region lines that overflow the grid's content width.
//!
//! Lengths are display widths in grid cells, so wide characters count twice.

use crate::layout::width::cell_width;

/// How a region's lines may be re-flowed when one of them is too wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflow {
    /// Lines are emitted as authored and truncated on render.
    Fixed,
    /// All lines are joined and greedily repacked at word boundaries.
    Words,
    /// Overflowing lines are split on runs of two or more spaces (one button per line).
    Buttons,
}

/// Re-flows `lines` to `width` according to `mode`.
///
/// Nothing happens unless at least one line is longer than `width`; short multi-line
/// regions keep their authored line breaks.
pub fn reflow(lines: &[String], width: usize, mode: Reflow) -> Vec<String> {
    let overflows = lines.iter().any(|line| cell_width(line) > width);
    if !overflows {
        return lines.to_vec();
    }

    match mode {
        Reflow::Fixed => lines.to_vec(),
        Reflow::Words => wrap_words(&lines.join(" "), width),
        Reflow::Buttons => lines
            .iter()
            .flat_map(|line| {
                if cell_width(line) > width {
                    split_buttons(line)
                } else {
                    vec![line.clone()]
                }
            })
            .collect(),
    }
}

/// Greedy word wrap. Words are never split; a word longer than `width` gets a line
/// of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = cell_width(word);
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a CTA line like `"[ Get in Touch ]   [ View Projects ]"` into its buttons.
pub fn split_buttons(line: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut pending_spaces = 0usize;

    for c in line.chars() {
        if c == ' ' {
            pending_spaces += 1;
            continue;
        }
        if pending_spaces >= 2 {
            pieces.push(std::mem::take(&mut current));
        } else if pending_spaces == 1 && !current.is_empty() {
            current.push(' ');
        }
        pending_spaces = 0;
        current.push(c);
    }
    pieces.push(current);

    pieces
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
