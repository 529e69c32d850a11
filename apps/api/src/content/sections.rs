//! The site's hand-authored content, top to bottom.
//!
//! Built once at startup from the stats snapshot; star and project counts are
//! baked into the text as literal numbers before the model is frozen.

use crate::content::model::{Accent, ContentRegion, ContentSection, EmbeddedBlock, Tile};
use crate::stats::SiteStats;

pub fn site_sections(stats: &SiteStats) -> Vec<ContentSection> {
    vec![
        hero(),
        about(),
        projects(stats),
        contact(),
        footer(),
    ]
}

fn hero() -> ContentSection {
    ContentSection {
        id: None,
        filler_lines_before: 5,
        regions: vec![
            ContentRegion::Embedded(
                EmbeddedBlock::new("photo")
                    .label("milan.png")
                    .size(10, 22),
            ),
            ContentRegion::Spacer,
            ContentRegion::heading(Accent::Default, &["MILAN ROTHER"]),
            ContentRegion::Spacer,
            ContentRegion::paragraph(&[
                "I build simulation tools end-to-end --",
                "numerical methods, infrastructure, and",
                "the interfaces to use them.",
            ]),
            ContentRegion::Spacer,
            ContentRegion::cta(&["[ Get in Touch -> ]   [ View Projects ]"]),
        ],
    }
}

fn about() -> ContentSection {
    ContentSection {
        id: Some("about".to_string()),
        filler_lines_before: 5,
        regions: vec![
            ContentRegion::heading(Accent::Default, &["WHO AM I"]),
            ContentRegion::Spacer,
            ContentRegion::paragraph(&[
                "I'm a research engineer and PhD candidate",
                "in electrical engineering. I build simulation",
                "software and solve numerical problems for",
                "teams working on complex physical systems.",
            ]),
            ContentRegion::Spacer,
            ContentRegion::paragraph(&[
                "Currently consulting for MIT Plasma Science",
                "& Fusion Center on nuclear fusion fuel-cycle",
                "modeling -- building simulation infrastructure",
                "for systems that don't fit in commercial tools.",
            ]),
            ContentRegion::Spacer,
            ContentRegion::paragraph(&[
                "Previously at TU Braunschweig, where I",
                "developed numerical methods for electrochemical",
                "sensors and EDA pipelines for cryogenic",
                "quantum applications, validated in silicon.",
            ]),
            ContentRegion::Spacer,
            ContentRegion::paragraph(&[
                "I built PathSim because system modeling",
                "software has a long history of vendor lock-in",
                "and clunky UX. It's pure Python, open source,",
                "and designed from first principles. I also",
                "designed the documentation sites, landing",
                "pages, and PathView -- the browser-based editor.",
            ]),
            ContentRegion::Spacer,
            ContentRegion::link_line(Accent::Default, &["GitHub   LinkedIn"]),
        ],
    }
}

fn projects(stats: &SiteStats) -> ContentSection {
    let pathsim = &stats.current.pathsim;
    let pysimhub = &stats.current.pysimhub;
    // The star history may have been fetched after the current counters.
    let pathsim_stars = pathsim
        .stars
        .max(stats.latest_stars("pathsim").unwrap_or_default());
    let pathsim_line = format!(
        "{} stars   {} forks   GitHub   Docs",
        pathsim_stars, pathsim.forks
    );
    let pysimhub_line = format!(
        "{} projects   {} stars combined   pysimhub.io",
        pysimhub.projects, pysimhub.cumulative_stars
    );

    ContentSection {
        id: Some("projects".to_string()),
        filler_lines_before: 5,
        regions: vec![
            ContentRegion::heading(Accent::Default, &["PROJECTS"]),
            ContentRegion::Spacer,
            ContentRegion::paragraph(&[
                "Building open-source infrastructure for",
                "system modeling and simulation.",
            ]),
            ContentRegion::Spacer,
            ContentRegion::Spacer,
            ContentRegion::heading(Accent::PathSim, &["PathSim + PathView"]),
            ContentRegion::Spacer,
            ContentRegion::paragraph(&[
                "A complete ecosystem for dynamical system",
                "simulation -- framework, documentation,",
                "browser-based editor, and community-driven",
                "toolbox development.",
            ]),
            ContentRegion::Spacer,
            ContentRegion::Embedded(
                EmbeddedBlock::new("pathsim-tiles")
                    .accent(Accent::PathSim)
                    .size(6, 26)
                    .tiles(vec![
                        Tile::new("tile-pathsim", "pathsim.org"),
                        Tile::new("tile-pathview", "view.pathsim.org"),
                        Tile::new("tile-docs", "docs.pathsim.org"),
                    ]),
            ),
            ContentRegion::Spacer,
            ContentRegion::link_line(Accent::PathSim, &[pathsim_line.as_str()]),
            ContentRegion::Spacer,
            ContentRegion::Spacer,
            ContentRegion::Spacer,
            ContentRegion::heading(Accent::PySimHub, &["PySimHub"]),
            ContentRegion::Spacer,
            ContentRegion::paragraph(&[
                "An open community catalog bridging Python's",
                "scattered simulation communities -- an awesome",
                "list that's also awesome to use.",
            ]),
            ContentRegion::Spacer,
            ContentRegion::Embedded(
                EmbeddedBlock::new("pysimhub-tiles")
                    .accent(Accent::PySimHub)
                    .size(6, 26)
                    .tiles(vec![
                        Tile::new("tile-pysimhub-catalog", "catalog"),
                        Tile::new("tile-pysimhub-trending", "trending"),
                        Tile::new("tile-pysimhub-submit", "submit"),
                    ]),
            ),
            ContentRegion::Spacer,
            ContentRegion::link_line(Accent::PySimHub, &[pysimhub_line.as_str()]),
        ],
    }
}

fn contact() -> ContentSection {
    ContentSection {
        id: Some("contact".to_string()),
        filler_lines_before: 5,
        regions: vec![
            ContentRegion::heading(Accent::Default, &["LET'S WORK TOGETHER"]),
            ContentRegion::Spacer,
            ContentRegion::paragraph(&[
                "Need simulation infrastructure that's",
                "robust and also fun to use? Let's talk!",
            ]),
            ContentRegion::Spacer,
            ContentRegion::content(&["// name"]),
            ContentRegion::form_field("field-name"),
            ContentRegion::Spacer,
            ContentRegion::content(&["// email"]),
            ContentRegion::form_field("field-email"),
            ContentRegion::Spacer,
            ContentRegion::content(&["// subject"]),
            ContentRegion::form_field("field-subject"),
            ContentRegion::Spacer,
            ContentRegion::content(&["// message"]),
            ContentRegion::form_field("field-message-1"),
            ContentRegion::form_field("field-message-2"),
            ContentRegion::form_field("field-message-3"),
            ContentRegion::Spacer,
            ContentRegion::cta(&["[ SEND MESSAGE -> ]"]),
        ],
    }
}

fn footer() -> ContentSection {
    ContentSection {
        id: None,
        filler_lines_before: 3,
        regions: vec![
            ContentRegion::footer_line(&["Milan Rother    GitHub  LinkedIn    (c) 2026"]),
            ContentRegion::Spacer,
            ContentRegion::Spacer,
        ],
    }
}
