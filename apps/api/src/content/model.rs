//! Content model schema: sections made of typed regions.
//!
//! Each region kind carries only the fields that apply to it. Heading, link-line
//! and frame colour variants share one `Accent` instead of separate region kinds.

use serde::{Deserialize, Serialize};

pub const DEFAULT_EMBEDDED_ROWS: usize = 10;
pub const DEFAULT_EMBEDDED_COLS: usize = 40;
pub const DEFAULT_FORM_FIELD_LINE: &str = "> ________________________________________";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Default,
    PathSim,
    PySimHub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Center,
    Left,
}

/// Region tag names as the content authoring format spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionType {
    Heading,
    HeadingPathsim,
    HeadingPysimhub,
    Paragraph,
    Spacer,
    Embedded,
    Cta,
    LinkLine,
    LinkLinePathsim,
    LinkLinePysimhub,
    FooterLine,
    Content,
    FormField,
}

/// One independently framed and labeled sub-block of a tiled embedded region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: String,
    pub label: String,
}

impl Tile {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A framed block whose interior the renderer fills with an image, iframe or tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedBlock {
    pub id: String,
    pub label: String,
    pub accent: Accent,
    /// Interior rows.
    pub rows: usize,
    /// Requested interior columns (per tile when `tiles` is non-empty).
    pub cols: usize,
    /// When non-empty the block renders as one frame per tile, each framed with the
    /// tile's own id and label; `label` is then unused.
    pub tiles: Vec<Tile>,
}

impl EmbeddedBlock {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            accent: Accent::Default,
            rows: DEFAULT_EMBEDDED_ROWS,
            cols: DEFAULT_EMBEDDED_COLS,
            tiles: Vec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    pub fn size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn tiles(mut self, tiles: Vec<Tile>) -> Self {
        self.tiles = tiles;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRegion {
    Heading {
        lines: Vec<String>,
        accent: Accent,
        align: Align,
    },
    Paragraph {
        lines: Vec<String>,
        align: Align,
    },
    Spacer,
    Embedded(EmbeddedBlock),
    Cta {
        lines: Vec<String>,
        align: Align,
    },
    LinkLine {
        lines: Vec<String>,
        accent: Accent,
        align: Align,
    },
    FooterLine {
        lines: Vec<String>,
        align: Align,
    },
    Content {
        lines: Vec<String>,
        align: Align,
    },
    FormField {
        id: Option<String>,
        line: String,
        align: Align,
    },
}

impl ContentRegion {
    pub fn kind(&self) -> RegionType {
        match self {
            ContentRegion::Heading { accent, .. } => match accent {
                Accent::Default => RegionType::Heading,
                Accent::PathSim => RegionType::HeadingPathsim,
                Accent::PySimHub => RegionType::HeadingPysimhub,
            },
            ContentRegion::Paragraph { .. } => RegionType::Paragraph,
            ContentRegion::Spacer => RegionType::Spacer,
            ContentRegion::Embedded(_) => RegionType::Embedded,
            ContentRegion::Cta { .. } => RegionType::Cta,
            ContentRegion::LinkLine { accent, .. } => match accent {
                Accent::Default => RegionType::LinkLine,
                Accent::PathSim => RegionType::LinkLinePathsim,
                Accent::PySimHub => RegionType::LinkLinePysimhub,
            },
            ContentRegion::FooterLine { .. } => RegionType::FooterLine,
            ContentRegion::Content { .. } => RegionType::Content,
            ContentRegion::FormField { .. } => RegionType::FormField,
        }
    }

    // Centered constructors for hand-authored content.

    pub fn heading(accent: Accent, lines: &[&str]) -> Self {
        ContentRegion::Heading {
            lines: to_lines(lines),
            accent,
            align: Align::Center,
        }
    }

    pub fn paragraph(lines: &[&str]) -> Self {
        ContentRegion::Paragraph {
            lines: to_lines(lines),
            align: Align::Center,
        }
    }

    pub fn cta(lines: &[&str]) -> Self {
        ContentRegion::Cta {
            lines: to_lines(lines),
            align: Align::Center,
        }
    }

    pub fn link_line(accent: Accent, lines: &[&str]) -> Self {
        ContentRegion::LinkLine {
            lines: to_lines(lines),
            accent,
            align: Align::Center,
        }
    }

    pub fn footer_line(lines: &[&str]) -> Self {
        ContentRegion::FooterLine {
            lines: to_lines(lines),
            align: Align::Center,
        }
    }

    pub fn content(lines: &[&str]) -> Self {
        ContentRegion::Content {
            lines: to_lines(lines),
            align: Align::Center,
        }
    }

    pub fn form_field(id: &str) -> Self {
        ContentRegion::FormField {
            id: Some(id.to_string()),
            line: DEFAULT_FORM_FIELD_LINE.to_string(),
            align: Align::Center,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSection {
    /// Anchor id for in-page navigation.
    pub id: Option<String>,
    pub filler_lines_before: usize,
    pub regions: Vec<ContentRegion>,
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}
