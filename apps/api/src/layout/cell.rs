//! Grid cell and layout output types consumed by the renderer.

use serde::{Deserialize, Serialize};

use crate::content::model::Accent;

// ────────────────────────────────────────────────────────────────────────────
// Cells
// ────────────────────────────────────────────────────────────────────────────

/// Styling tag for a single grid cell. Serialized with the exact names the renderer
/// switches on (`heading-pathsim`, `form-field`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellType {
    Filler,
    Content,
    Heading,
    HeadingPathsim,
    HeadingPysimhub,
    Cta,
    Link,
    LinkPathsim,
    LinkPysimhub,
    Footer,
    Empty,
    FormField,
    Frame,
    FramePathsim,
    FramePysimhub,
}

impl CellType {
    pub fn heading(accent: Accent) -> Self {
        match accent {
            Accent::Default => CellType::Heading,
            Accent::PathSim => CellType::HeadingPathsim,
            Accent::PySimHub => CellType::HeadingPysimhub,
        }
    }

    pub fn link(accent: Accent) -> Self {
        match accent {
            Accent::Default => CellType::Link,
            Accent::PathSim => CellType::LinkPathsim,
            Accent::PySimHub => CellType::LinkPysimhub,
        }
    }

    pub fn frame(accent: Accent) -> Self {
        match accent {
            Accent::Default => CellType::Frame,
            Accent::PathSim => CellType::FramePathsim,
            Accent::PySimHub => CellType::FramePysimhub,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "char")]
    pub ch: char,
    #[serde(rename = "type")]
    pub kind: CellType,
}

impl Cell {
    pub fn new(ch: char, kind: CellType) -> Self {
        Self { ch, kind }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout output
// ────────────────────────────────────────────────────────────────────────────

/// Interior (content) rectangle of a frame, excluding the border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedBlockPosition {
    pub id: String,
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}

/// Writable span of a form field's underline, after the `"> "` prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldPosition {
    pub id: String,
    pub row: usize,
    pub col: usize,
    pub width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionAnchor {
    pub id: String,
    pub row: usize,
}

/// Result of one layout pass: a `rows × cols` cell matrix plus the positions the
/// renderer overlays external content onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub cells: Vec<Vec<Cell>>,
    pub rows: usize,
    pub cols: usize,
    pub embedded_blocks: Vec<EmbeddedBlockPosition>,
    pub form_fields: Vec<FormFieldPosition>,
    pub section_anchors: Vec<SectionAnchor>,
}

impl GridLayout {
    /// Renders the grid as newline-separated rows of plain characters.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in &self.cells {
            out.extend(row.iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
impl GridLayout {
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.cells
            .get(row)
            .map(|cells| cells.iter().map(|c| c.ch).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── CellType serialization ──────────────────────────────────────────────

    #[test]
    fn test_cell_type_serializes_kebab_case() {
        let json = serde_json::to_string(&CellType::HeadingPysimhub).unwrap();
        assert_eq!(json, "\"heading-pysimhub\"");
        let json = serde_json::to_string(&CellType::FormField).unwrap();
        assert_eq!(json, "\"form-field\"");
    }

    #[test]
    fn test_cell_serializes_char_and_type_keys() {
        let value = serde_json::to_value(Cell::new('x', CellType::Filler)).unwrap();
        assert_eq!(value["char"], "x");
        assert_eq!(value["type"], "filler");
    }

    #[test]
    fn test_accent_mapping() {
        assert_eq!(CellType::heading(Accent::PathSim), CellType::HeadingPathsim);
        assert_eq!(CellType::link(Accent::PySimHub), CellType::LinkPysimhub);
        assert_eq!(CellType::frame(Accent::Default), CellType::Frame);
    }

    // ── GridLayout ──────────────────────────────────────────────────────────

    #[test]
    fn test_layout_serializes_camel_case_metadata() {
        let layout = GridLayout {
            cells: vec![],
            rows: 0,
            cols: 10,
            embedded_blocks: vec![],
            form_fields: vec![],
            section_anchors: vec![],
        };
        let value = serde_json::to_value(&layout).unwrap();
        assert!(value.get("embeddedBlocks").is_some());
        assert!(value.get("formFields").is_some());
        assert!(value.get("sectionAnchors").is_some());
    }

    #[test]
    fn test_to_text_joins_rows() {
        let layout = GridLayout {
            cells: vec![
                vec![Cell::new('a', CellType::Filler), Cell::new('b', CellType::Filler)],
                vec![Cell::new('H', CellType::Heading), Cell::new('I', CellType::Heading)],
            ],
            rows: 2,
            cols: 2,
            embedded_blocks: vec![],
            form_fields: vec![],
            section_anchors: vec![],
        };
        assert_eq!(layout.to_text(), "ab\nHI\n");
        assert_eq!(layout.row_text(1).as_deref(), Some("HI"));
        assert_eq!(layout.row_text(2), None);
    }
}
