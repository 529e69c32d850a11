//! Box-drawing borders for embedded blocks and tiles.

use crate::layout::width::cell_chars;

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
pub const VERTICAL: char = '│';

/// Top border, `frame_cols` characters wide, with an optional label:
/// `┌─ label ─────┐` or plain `┌─────┐`.
///
/// The label is truncated to `frame_cols - 5` cells so the opening `┌─ `, its
/// trailing space and the closing `┐` always fit.
pub fn frame_top(frame_cols: usize, label: &str) -> String {
    let trimmed: String = cell_chars(label).take(frame_cols.saturating_sub(5)).collect();
    if trimmed.is_empty() {
        return plain_border(frame_cols, TOP_LEFT, TOP_RIGHT);
    }

    let mut top = format!("{TOP_LEFT}{HORIZONTAL} {trimmed} ");
    let used = trimmed.chars().count() + 4;
    top.extend(std::iter::repeat(HORIZONTAL).take(frame_cols.saturating_sub(used + 1)));
    top.push(TOP_RIGHT);
    top
}

pub fn frame_bottom(frame_cols: usize) -> String {
    plain_border(frame_cols, BOTTOM_LEFT, BOTTOM_RIGHT)
}

fn plain_border(frame_cols: usize, left: char, right: char) -> String {
    let mut border = String::with_capacity(frame_cols * 3);
    border.push(left);
    border.extend(std::iter::repeat(HORIZONTAL).take(frame_cols.saturating_sub(2)));
    border.push(right);
    border
}
