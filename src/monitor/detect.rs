//! Change predicates deciding when the monitor redraws.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Redraw only when the number of records changes.
///
/// Replacing a record with another one keeps the count, so such edits are
/// not seen until the count moves.
pub fn count_changed<T>(current: &[T], previous: &[T]) -> bool {
    current.len() != previous.len()
}

/// Redraw whenever any record differs.
pub fn content_changed<T: PartialEq>(current: &[T], previous: &[T]) -> bool {
    current != previous
}

/// Which change predicate the monitor uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectMode {
    #[default]
    Count,
    Content,
}

impl DetectMode {
    pub fn name(&self) -> &'static str {
        match self {
            DetectMode::Count => "count",
            DetectMode::Content => "content",
        }
    }

    pub fn all() -> &'static [DetectMode] {
        &[DetectMode::Count, DetectMode::Content]
    }

    pub fn predicate<T: PartialEq>(self) -> fn(&[T], &[T]) -> bool {
        match self {
            DetectMode::Count => count_changed::<T>,
            DetectMode::Content => content_changed::<T>,
        }
    }
}

impl fmt::Display for DetectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DetectMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DetectMode::all()
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown detect mode '{}' (expected count or content)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_changed_ignores_same_size_edits() {
        assert!(!count_changed(&[1, 2], &[3, 4]));
        assert!(count_changed(&[1, 2, 3], &[1, 2]));
        assert!(count_changed::<u8>(&[], &[1]));
    }

    #[test]
    fn test_content_changed_sees_same_size_edits() {
        assert!(content_changed(&[1, 2], &[3, 4]));
        assert!(!content_changed(&[1, 2], &[1, 2]));
    }

    #[test]
    fn test_predicate_selects_function() {
        let count = DetectMode::Count.predicate::<i32>();
        let content = DetectMode::Content.predicate::<i32>();
        assert!(!count(&[1], &[2]));
        assert!(content(&[1], &[2]));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Content".parse::<DetectMode>().unwrap(), DetectMode::Content);
        assert_eq!("count".parse::<DetectMode>().unwrap(), DetectMode::Count);
        assert!("diff".parse::<DetectMode>().is_err());
    }

    #[test]
    fn test_default_is_count() {
        assert_eq!(DetectMode::default(), DetectMode::Count);
    }
}
