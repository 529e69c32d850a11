//! GitHub / community stats snapshot.
//!
//! The snapshot is produced offline and read once at startup, before the content
//! model is frozen. A missing or corrupt snapshot never blocks startup: the failure
//! is logged and an empty snapshot is used (stale-on-error).

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to read stats snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse stats snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteStats {
    pub current: CurrentStats,
    /// Daily snapshots, passed through untouched.
    pub history: Vec<serde_json::Value>,
    /// Cumulative star counts per repository, oldest first.
    pub star_history: BTreeMap<String, Vec<StarHistoryPoint>>,
    pub fetched_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentStats {
    pub pathsim: PathSimStats,
    pub pysimhub: PySimHubStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSimStats {
    pub stars: u64,
    pub forks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PySimHubStats {
    pub projects: u64,
    pub members: u64,
    pub cumulative_stars: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarHistoryPoint {
    pub date: NaiveDate,
    pub stars: u64,
}

impl SiteStats {
    /// Latest cumulative star count recorded in the star history for `repo`.
    pub fn latest_stars(&self, repo: &str) -> Option<u64> {
        self.star_history
            .get(repo)
            .and_then(|points| points.last())
            .map(|p| p.stars)
    }
}

pub fn load_stats(path: &Path) -> Result<SiteStats, StatsError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Loads the snapshot at `path`, or returns an empty snapshot after logging why it
/// could not be used.
pub fn load_or_default(path: &Path) -> SiteStats {
    match load_stats(path) {
        Ok(stats) => {
            info!(
                path = %path.display(),
                pathsim_stars = stats.current.pathsim.stars,
                pysimhub_projects = stats.current.pysimhub.projects,
                "Loaded stats snapshot"
            );
            stats
        }
        Err(e) => {
            error!(path = %path.display(), "Using empty stats snapshot: {e}");
            SiteStats::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "current": {
            "pathsim": { "stars": 312, "forks": 27, "watchers": 9 },
            "pysimhub": { "projects": 48, "members": 6, "cumulativeStars": 15210 }
        },
        "history": [{ "date": "2026-01-01", "pathsim": { "stars": 290 } }],
        "starHistory": {
            "pathsim": [
                { "date": "2024-03-01", "stars": 10 },
                { "date": "2026-01-01", "stars": 312 }
            ]
        },
        "fetchedAt": "2026-01-02T08:00:00Z"
    }"#;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // ── parsing ─────────────────────────────────────────────────────────────

    #[test]
    fn test_load_stats_parses_snapshot() {
        let file = write_snapshot(SNAPSHOT);
        let stats = load_stats(file.path()).unwrap();
        assert_eq!(stats.current.pathsim.stars, 312);
        assert_eq!(stats.current.pathsim.forks, 27);
        assert_eq!(stats.current.pysimhub.cumulative_stars, 15210);
        assert_eq!(stats.history.len(), 1);
        assert!(stats.fetched_at.is_some());
    }

    #[test]
    fn test_missing_fields_default() {
        let file = write_snapshot(r#"{ "current": { "pathsim": { "stars": 5 } } }"#);
        let stats = load_stats(file.path()).unwrap();
        assert_eq!(stats.current.pathsim.stars, 5);
        assert_eq!(stats.current.pysimhub, PySimHubStats::default());
        assert!(stats.star_history.is_empty());
    }

    #[test]
    fn test_latest_stars() {
        let file = write_snapshot(SNAPSHOT);
        let stats = load_stats(file.path()).unwrap();
        assert_eq!(stats.latest_stars("pathsim"), Some(312));
        assert_eq!(stats.latest_stars("pathview"), None);
    }

    // ── stale-on-error ──────────────────────────────────────────────────────

    #[test]
    fn test_load_stats_reports_parse_error() {
        let file = write_snapshot("{ not json");
        assert!(matches!(load_stats(file.path()), Err(StatsError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let stats = load_or_default(&dir.path().join("github-stats.json"));
        assert_eq!(stats, SiteStats::default());
    }

    #[test]
    fn test_load_or_default_on_corrupt_file() {
        let file = write_snapshot("[1, 2");
        assert_eq!(load_or_default(file.path()), SiteStats::default());
    }
}
