//! Grid Layout Engine — lays the content model out onto a fixed-width character grid.
//!
//! # Algorithm
//! Rows are emitted top to bottom. A single filler cursor starts at 0 and advances by
//! exactly `cols` (modulo the filler length) after every emitted row, whatever the row
//! holds, so the background reads as one continuous stream of filler text. Content,
//! frames and form fields are painted over an otherwise filler row.
//!
//! The engine is a pure function of `(cols, sections, filler)` and is total for every
//! `cols >= 1`: narrow grids clamp margins and frame widths to zero instead of failing.

use tracing::debug;

use crate::content::model::{
    Accent, Align, ContentRegion, ContentSection, EmbeddedBlock, DEFAULT_FORM_FIELD_LINE,
};
use crate::layout::cell::{
    Cell, CellType, EmbeddedBlockPosition, FormFieldPosition, GridLayout, SectionAnchor,
};
use crate::layout::filler::FillerSource;
use crate::layout::frame::{frame_bottom, frame_top, VERTICAL};
use crate::layout::width::cell_chars;
use crate::layout::wrap::{reflow, Reflow};

// ────────────────────────────────────────────────────────────────────────────
// Constants & options
// ────────────────────────────────────────────────────────────────────────────

pub const TRAILING_FILLER_ROWS: usize = 3;

/// Minimum filler margin on each side of centered text.
const TEXT_MARGIN: usize = 2;
/// Width of the content column left-aligned text is anchored to.
const LEFT_COLUMN_WIDTH: usize = 50;
/// Columns a single frame's interior gives up to its border and margins.
const FRAME_MARGIN: usize = 6;
const TILE_GAP: usize = 2;
const MIN_SIDE_BY_SIDE_TILE_COLS: usize = 18;
/// Length of the `"> "` prompt in front of a form field.
const PROMPT_WIDTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Filler rows appended after the last section.
    pub trailing_filler_rows: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            trailing_filler_rows: TRAILING_FILLER_ROWS,
        }
    }
}

/// How the tiles of an embedded block are placed at a given grid width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileArrangement {
    /// All tiles share one set of border/interior/border rows.
    SideBySide { tile_cols: usize },
    /// Each tile is drawn as its own full-width frame, one filler row apart.
    Stacked,
}

/// Decides between side-by-side and stacked tiles.
///
/// The content band (`cols - 4`) is shared evenly between tiles with a 2-column gap
/// between neighbours; each tile asks for `block.cols + 2` frame columns. Tiles go
/// side by side when each gets at least 18 frame columns, or when there is only one.
pub fn tile_arrangement(cols: usize, block: &EmbeddedBlock) -> TileArrangement {
    let n = block.tiles.len();
    if n <= 1 {
        return TileArrangement::SideBySide {
            tile_cols: single_frame_cols(cols, block.cols),
        };
    }

    let available = cols.saturating_sub(2 * TEXT_MARGIN);
    let share = available.saturating_sub(TILE_GAP * (n - 1)) / n;
    let tile_cols = (block.cols + 2).min(share);
    if tile_cols >= MIN_SIDE_BY_SIDE_TILE_COLS {
        TileArrangement::SideBySide { tile_cols }
    } else {
        TileArrangement::Stacked
    }
}

fn single_frame_cols(cols: usize, requested_inner: usize) -> usize {
    requested_inner.min(cols.saturating_sub(FRAME_MARGIN)) + 2
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Lays `sections` out on a grid `cols` wide, followed by the default trailing filler.
pub fn compute_grid_layout(
    cols: usize,
    sections: &[ContentSection],
    filler: &FillerSource,
) -> GridLayout {
    compute_grid_layout_with(cols, sections, filler, &LayoutOptions::default())
}

pub fn compute_grid_layout_with(
    cols: usize,
    sections: &[ContentSection],
    filler: &FillerSource,
    options: &LayoutOptions,
) -> GridLayout {
    let mut grid = GridBuilder::new(cols, filler);

    for section in sections {
        if let Some(id) = &section.id {
            // Anchor at the first row after the leading filler.
            grid.section_anchors.push(SectionAnchor {
                id: id.clone(),
                row: grid.cells.len() + section.filler_lines_before,
            });
        }

        grid.push_filler_rows(section.filler_lines_before);

        for region in &section.regions {
            grid.push_region(region);
        }
    }

    grid.push_filler_rows(options.trailing_filler_rows);
    grid.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// One frame placed on a row band: its border spans `start..start + frame_cols`.
struct FrameSlot<'r> {
    id: &'r str,
    label: &'r str,
    start: usize,
    frame_cols: usize,
}

struct GridBuilder<'f> {
    cols: usize,
    filler: &'f FillerSource,
    offset: usize,
    cells: Vec<Vec<Cell>>,
    embedded_blocks: Vec<EmbeddedBlockPosition>,
    form_fields: Vec<FormFieldPosition>,
    section_anchors: Vec<SectionAnchor>,
}

impl<'f> GridBuilder<'f> {
    fn new(cols: usize, filler: &'f FillerSource) -> Self {
        Self {
            cols,
            filler,
            offset: 0,
            cells: Vec::new(),
            embedded_blocks: Vec::new(),
            form_fields: Vec::new(),
            section_anchors: Vec::new(),
        }
    }

    fn finish(self) -> GridLayout {
        GridLayout {
            rows: self.cells.len(),
            cols: self.cols,
            cells: self.cells,
            embedded_blocks: self.embedded_blocks,
            form_fields: self.form_fields,
            section_anchors: self.section_anchors,
        }
    }

    /// Widest text span that still leaves the minimum filler margin on both sides.
    fn content_width(&self) -> usize {
        self.cols.saturating_sub(2 * TEXT_MARGIN)
    }

    fn filler_row(&self) -> Vec<Cell> {
        (0..self.cols)
            .map(|i| Cell::new(self.filler.char_at(self.offset + i), CellType::Filler))
            .collect()
    }

    fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.cols);
        self.cells.push(row);
        self.offset = (self.offset + self.cols) % self.filler.len();
    }

    fn push_filler_rows(&mut self, count: usize) {
        for _ in 0..count {
            let row = self.filler_row();
            self.push_row(row);
        }
    }

    fn push_region(&mut self, region: &ContentRegion) {
        match region {
            ContentRegion::Spacer => self.push_filler_rows(1),
            ContentRegion::Heading {
                lines,
                accent,
                align,
            } => self.push_text(lines, CellType::heading(*accent), *align, Reflow::Fixed),
            ContentRegion::Paragraph { lines, align } | ContentRegion::Content { lines, align } => {
                self.push_text(lines, CellType::Content, *align, Reflow::Words)
            }
            ContentRegion::LinkLine {
                lines,
                accent,
                align,
            } => self.push_text(lines, CellType::link(*accent), *align, Reflow::Words),
            ContentRegion::FooterLine { lines, align } => {
                self.push_text(lines, CellType::Footer, *align, Reflow::Words)
            }
            ContentRegion::Cta { lines, align } => {
                self.push_text(lines, CellType::Cta, *align, Reflow::Buttons)
            }
            ContentRegion::FormField { id, line, align } => {
                self.push_form_field(id.as_deref(), line, *align)
            }
            ContentRegion::Embedded(block) if block.tiles.is_empty() => {
                let slot = self.centered_slot(&block.id, &block.label, block.cols);
                self.push_frames(&[slot], block.rows, block.accent);
            }
            ContentRegion::Embedded(block) => self.push_tiles(block),
        }
    }

    // ── text ────────────────────────────────────────────────────────────────

    fn push_text(&mut self, lines: &[String], kind: CellType, align: Align, mode: Reflow) {
        for line in reflow(lines, self.content_width(), mode) {
            let row = self.text_row(&line, kind, align);
            self.push_row(row);
        }
    }

    /// A filler row with `text` painted over it, truncated to the content width.
    fn text_row(&self, text: &str, kind: CellType, align: Align) -> Vec<Cell> {
        let chars: Vec<char> = cell_chars(text).collect();
        let width = chars.len().min(self.content_width());
        let start = match align {
            Align::Center => (self.cols - width) / 2,
            Align::Left => TEXT_MARGIN.max(self.cols.saturating_sub(LEFT_COLUMN_WIDTH) / 2),
        };

        let mut row = self.filler_row();
        paint(&mut row, start, chars.into_iter().take(width), kind);
        row
    }

    fn push_form_field(&mut self, id: Option<&str>, line: &str, align: Align) {
        let line = if line.is_empty() {
            DEFAULT_FORM_FIELD_LINE
        } else {
            line
        };
        let row = self.text_row(line, CellType::FormField, align);

        let first = row.iter().position(|c| c.kind == CellType::FormField);
        let last = row.iter().rposition(|c| c.kind == CellType::FormField);
        if let (Some(id), Some(first), Some(last)) = (id, first, last) {
            let width = (last + 1).saturating_sub(first + PROMPT_WIDTH);
            if width > 0 {
                self.form_fields.push(FormFieldPosition {
                    id: id.to_string(),
                    row: self.cells.len(),
                    col: first + PROMPT_WIDTH,
                    width,
                });
            }
        }

        self.push_row(row);
    }

    // ── frames ──────────────────────────────────────────────────────────────

    fn centered_slot<'r>(&self, id: &'r str, label: &'r str, requested_inner: usize) -> FrameSlot<'r> {
        let frame_cols = single_frame_cols(self.cols, requested_inner);
        FrameSlot {
            id,
            label,
            start: self.cols.saturating_sub(frame_cols) / 2,
            frame_cols,
        }
    }

    /// Tiles carry their own labels; the group's label is not drawn.
    fn push_tiles(&mut self, block: &EmbeddedBlock) {
        let arrangement = tile_arrangement(self.cols, block);
        debug!(
            block = %block.id,
            tiles = block.tiles.len(),
            cols = self.cols,
            ?arrangement,
            "Placing tile group"
        );

        match arrangement {
            TileArrangement::SideBySide { tile_cols } if block.tiles.len() > 1 => {
                let n = block.tiles.len();
                let group = n * tile_cols + (n - 1) * TILE_GAP;
                let group_start = self.cols.saturating_sub(group) / 2;
                let slots: Vec<FrameSlot> = block
                    .tiles
                    .iter()
                    .enumerate()
                    .map(|(i, tile)| FrameSlot {
                        id: &tile.id,
                        label: &tile.label,
                        start: group_start + i * (tile_cols + TILE_GAP),
                        frame_cols: tile_cols,
                    })
                    .collect();
                self.push_frames(&slots, block.rows, block.accent);
            }
            TileArrangement::SideBySide { .. } => {
                let tile = &block.tiles[0];
                let slot = self.centered_slot(&tile.id, &tile.label, block.cols);
                self.push_frames(&[slot], block.rows, block.accent);
            }
            TileArrangement::Stacked => {
                for (i, tile) in block.tiles.iter().enumerate() {
                    if i > 0 {
                        self.push_filler_rows(1);
                    }
                    let slot = self.centered_slot(&tile.id, &tile.label, block.cols);
                    self.push_frames(&[slot], block.rows, block.accent);
                }
            }
        }
    }

    /// Draws every slot's frame across one shared band of `2 + inner_rows` rows and
    /// records each non-empty interior.
    fn push_frames(&mut self, slots: &[FrameSlot], inner_rows: usize, accent: Accent) {
        let kind = CellType::frame(accent);

        let mut top = self.filler_row();
        for slot in slots {
            paint(&mut top, slot.start, frame_top(slot.frame_cols, slot.label).chars(), kind);
        }
        self.push_row(top);

        let interior_row = self.cells.len();
        for slot in slots {
            let col = slot.start + 1;
            let inner_cols = slot.frame_cols.saturating_sub(2);
            if inner_rows > 0 && inner_cols > 0 && col + inner_cols <= self.cols {
                self.embedded_blocks.push(EmbeddedBlockPosition {
                    id: slot.id.to_string(),
                    row: interior_row,
                    col,
                    rows: inner_rows,
                    cols: inner_cols,
                });
            }
        }

        for _ in 0..inner_rows {
            let mut row = self.filler_row();
            for slot in slots {
                paint_sides(&mut row, slot, kind);
            }
            self.push_row(row);
        }

        let mut bottom = self.filler_row();
        for slot in slots {
            paint(&mut bottom, slot.start, frame_bottom(slot.frame_cols).chars(), kind);
        }
        self.push_row(bottom);
    }
}

/// Overwrites cells from `start` with `chars`, clipped at the row's end.
fn paint(row: &mut [Cell], start: usize, chars: impl Iterator<Item = char>, kind: CellType) {
    for (cell, ch) in row.iter_mut().skip(start).zip(chars) {
        *cell = Cell::new(ch, kind);
    }
}

fn paint_sides(row: &mut [Cell], slot: &FrameSlot, kind: CellType) {
    let end = slot.start + slot.frame_cols.max(2) - 1;
    for (i, cell) in row.iter_mut().enumerate().skip(slot.start) {
        if i == slot.start || i == end {
            *cell = Cell::new(VERTICAL, kind);
        } else if i < end {
            *cell = Cell::new(' ', CellType::Empty);
        } else {
            break;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
