//! Filler Source — the cyclic character stream painted into every non-content cell.
//!
//! The stream is indexed modulo its length, so the layout engine can keep a single
//! running cursor across all rows and the background reads as one continuous text.

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::layout::width::is_single_width;

const BUNDLED_FILLER: &str = include_str!("../../assets/filler-source.txt");

#[derive(Debug, Error)]
pub enum FillerError {
    #[error("filler source is empty after normalization")]
    Empty,
}

/// Immutable, non-empty character sequence, indexed cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerSource {
    chars: Vec<char>,
}

impl FillerSource {
    /// Builds a filler source from arbitrary text (typically concatenated source code).
    ///
    /// Every character of the result occupies exactly one grid cell: lines are trimmed,
    /// blank lines dropped, the rest joined with `"; "`, whitespace runs collapsed, and
    /// characters that are not single-width dropped. Doubled semicolons left over from
    /// the join are folded into one.
    pub fn from_text(text: &str) -> Result<Self, FillerError> {
        let chars = normalize(text);
        if chars.is_empty() {
            return Err(FillerError::Empty);
        }
        Ok(Self { chars })
    }

    /// The filler shipped with the binary.
    pub fn bundled() -> Self {
        let chars = normalize(BUNDLED_FILLER);
        debug_assert!(!chars.is_empty());
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Character at logical position `pos`, wrapping modulo the source length.
    pub fn char_at(&self, pos: usize) -> char {
        self.chars[pos % self.chars.len()]
    }
}

/// Loads the filler from `path`, falling back to the bundled filler when no path is
/// configured or the file is unusable.
pub fn load_filler(path: Option<&Path>) -> FillerSource {
    let Some(path) = path else {
        return FillerSource::bundled();
    };

    let loaded = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|text| FillerSource::from_text(&text).map_err(anyhow::Error::from));

    match loaded {
        Ok(filler) => {
            info!(path = %path.display(), chars = filler.len(), "Loaded filler source");
            filler
        }
        Err(e) => {
            warn!(path = %path.display(), "Falling back to bundled filler: {e}");
            FillerSource::bundled()
        }
    }
}

fn normalize(text: &str) -> Vec<char> {
    let joined = text
        .lines()
        .map(|line| {
            line.chars()
                .filter(|&c| c.is_whitespace() || c.is_control() || is_single_width(c))
                .collect::<String>()
        })
        .filter_map(|line| {
            let line = line.trim();
            (!line.is_empty()).then(|| line.to_string())
        })
        .collect::<Vec<_>>()
        .join("; ");

    let mut collapsed = String::with_capacity(joined.len());
    let mut last_was_space = false;
    for c in joined.chars() {
        if c.is_whitespace() || c.is_control() {
            if !last_was_space {
                collapsed.push(' ');
            }
            last_was_space = true;
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }

    let mut folded = String::with_capacity(collapsed.len());
    for c in collapsed.chars() {
        if c == ';' && folded.ends_with(';') {
            continue;
        }
        folded.push(c);
    }

    folded.replace("; ;", ";").chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── from_text ───────────────────────────────────────────────────────────

    #[test]
    fn test_from_text_joins_lines_with_semicolons() {
        let filler = FillerSource::from_text("let a = 1\n\n  let b = 2  \n").unwrap();
        let text: String = (0..filler.len()).map(|i| filler.char_at(i)).collect();
        assert_eq!(text, "let a = 1; let b = 2");
    }

    #[test]
    fn test_from_text_collapses_whitespace_and_tabs() {
        let filler = FillerSource::from_text("fn\t\tmain()   {}").unwrap();
        let text: String = (0..filler.len()).map(|i| filler.char_at(i)).collect();
        assert_eq!(text, "fn main() {}");
    }

    #[test]
    fn test_from_text_folds_doubled_semicolons() {
        let filler = FillerSource::from_text("let a = 1;\nlet b = 2;;\n;\nreturn").unwrap();
        let text: String = (0..filler.len()).map(|i| filler.char_at(i)).collect();
        assert_eq!(text, "let a = 1; let b = 2; return");
    }

    #[test]
    fn test_from_text_drops_wide_and_zero_width_chars() {
        let filler = FillerSource::from_text("ab😀cd漢字ef\u{200B}").unwrap();
        let text: String = (0..filler.len()).map(|i| filler.char_at(i)).collect();
        assert_eq!(text, "abcdef");

        let filler = FillerSource::from_text("// 日本語 ok").unwrap();
        let text: String = (0..filler.len()).map(|i| filler.char_at(i)).collect();
        assert_eq!(text, "// ok");
    }

    #[test]
    fn test_from_text_rejects_wide_only_input() {
        assert!(matches!(
            FillerSource::from_text("漢字\n😀"),
            Err(FillerError::Empty)
        ));
    }

    #[test]
    fn test_from_text_rejects_blank_input() {
        assert!(matches!(
            FillerSource::from_text("  \n\t\n"),
            Err(FillerError::Empty)
        ));
    }

    // ── char_at ─────────────────────────────────────────────────────────────

    #[test]
    fn test_char_at_wraps_cyclically() {
        let filler = FillerSource::from_text("abc").unwrap();
        assert_eq!(filler.char_at(0), 'a');
        assert_eq!(filler.char_at(2), 'c');
        assert_eq!(filler.char_at(3), 'a');
        assert_eq!(filler.char_at(3001), 'b');
        assert_eq!(filler.char_at(3002), 'c');
    }

    #[test]
    fn test_bundled_filler_is_single_line() {
        let filler = FillerSource::bundled();
        assert!(filler.len() > 100);
        assert!((0..filler.len()).all(|i| is_single_width(filler.char_at(i))));
    }

    // ── load_filler ─────────────────────────────────────────────────────────

    #[test]
    fn test_load_filler_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "xyz").unwrap();
        let filler = load_filler(Some(file.path()));
        assert_eq!(filler.len(), 3);
        assert_eq!(filler.char_at(1), 'y');
    }

    #[test]
    fn test_load_filler_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let filler = load_filler(Some(&dir.path().join("missing.txt")));
        assert_eq!(filler, FillerSource::bundled());
    }

    #[test]
    fn test_load_filler_without_path_uses_bundled() {
        assert_eq!(load_filler(None), FillerSource::bundled());
    }
}
