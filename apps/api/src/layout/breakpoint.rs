//! Viewport width → grid column count and font size.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointConfig {
    pub cols: usize,
    pub font_size: u8,
}

/// Exclusive upper bounds in CSS pixels, narrowest first.
const BREAKPOINTS: [(f64, BreakpointConfig); 4] = [
    (640.0, BreakpointConfig { cols: 40, font_size: 11 }),
    (768.0, BreakpointConfig { cols: 60, font_size: 12 }),
    (1024.0, BreakpointConfig { cols: 80, font_size: 13 }),
    (1280.0, BreakpointConfig { cols: 100, font_size: 13 }),
];

const WIDEST: BreakpointConfig = BreakpointConfig {
    cols: 120,
    font_size: 14,
};

/// Every column count `resolve_breakpoint` can return.
pub const BREAKPOINT_COLUMNS: [usize; 5] = [40, 60, 80, 100, 120];

/// Maps a viewport width to its breakpoint bucket. Total: zero, negative and NaN
/// widths fall into the narrowest bucket.
pub fn resolve_breakpoint(viewport_width_px: f64) -> BreakpointConfig {
    if viewport_width_px.is_nan() {
        return BREAKPOINTS[0].1;
    }
    BREAKPOINTS
        .iter()
        .find(|(max_width, _)| viewport_width_px < *max_width)
        .map(|(_, config)| *config)
        .unwrap_or(WIDEST)
}
