use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::content::{site_sections, ContentRegion, ContentSection};
use crate::layout::{compute_grid_layout, FillerSource, GridLayout, BREAKPOINT_COLUMNS};
use crate::stats::SiteStats;

/// The frozen site: content model, filler stream, and the layout for every breakpoint.
///
/// Built exactly once at startup and shared read-only through `AppState`.
pub struct Site {
    sections: Vec<ContentSection>,
    filler: FillerSource,
    stats: Arc<SiteStats>,
    layouts: HashMap<usize, Arc<GridLayout>>,
}

impl Site {
    /// Builds the content model from `stats`, then precomputes every breakpoint layout.
    pub fn new(stats: SiteStats, filler: FillerSource) -> Self {
        let sections = site_sections(&stats);
        Self::from_parts(sections, stats, filler)
    }

    pub fn from_parts(sections: Vec<ContentSection>, stats: SiteStats, filler: FillerSource) -> Self {
        for section in &sections {
            let kinds: Vec<_> = section.regions.iter().map(ContentRegion::kind).collect();
            debug!(
                section = section.id.as_deref().unwrap_or("-"),
                regions = ?kinds,
                "Content section"
            );
        }

        let layouts = BREAKPOINT_COLUMNS
            .iter()
            .map(|&cols| {
                let layout = compute_grid_layout(cols, &sections, &filler);
                debug!(cols, rows = layout.rows, "Precomputed breakpoint layout");
                (cols, Arc::new(layout))
            })
            .collect::<HashMap<_, _>>();

        info!(
            sections = sections.len(),
            filler_chars = filler.len(),
            breakpoints = layouts.len(),
            "Site content frozen"
        );

        Self {
            sections,
            filler,
            stats: Arc::new(stats),
            layouts,
        }
    }

    /// Precomputed layout for a breakpoint column count.
    pub fn cached_layout(&self, cols: usize) -> Option<Arc<GridLayout>> {
        self.layouts.get(&cols).cloned()
    }

    /// Layout for any column count: cached when it is a breakpoint, computed otherwise.
    pub fn layout(&self, cols: usize) -> Arc<GridLayout> {
        self.cached_layout(cols)
            .unwrap_or_else(|| Arc::new(compute_grid_layout(cols, &self.sections, &self.filler)))
    }

    pub fn stats(&self) -> Arc<SiteStats> {
        Arc::clone(&self.stats)
    }

    #[cfg(test)]
    pub fn sections(&self) -> &[ContentSection] {
        &self.sections
    }
}
