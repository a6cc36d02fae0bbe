use crate::{read_file, Result};
use log::debug;
use std::path::Path;

/// Separates the bracketed sub-records on a grouping line.
pub const SUB_RECORD_DELIMITER: &str = "},";

/// The grouping file, held in memory so talk-group usage can be counted repeatedly.
///
/// Matching is purely textual: a sub-record references talk group `n` when it contains
/// `,n,` anywhere. Digits embedded in an unrelated field that happens to be bracketed by
/// commas the same way are counted too.
#[derive(Debug, Clone, Default)]
pub struct GroupIndex {
    lines: Vec<String>,
}

impl GroupIndex {
    pub fn new(text: &str) -> Self {
        Self { lines: text.lines().map(str::to_owned).collect() }
    }

    /// Load the whole grouping file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let index = Self::new(&read_file(path.as_ref())?);
        debug!("loaded {} grouping lines from {}", index.lines.len(), path.as_ref().display());
        Ok(index)
    }

    /// Number of sub-records across all lines that reference the talk group.
    pub fn count(&self, id: i64) -> usize {
        let needle = format!(",{},", id);
        self.lines
            .iter()
            .flat_map(|line| line.split(SUB_RECORD_DELIMITER))
            .filter(|sub_record| sub_record.contains(&needle))
            .count()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUPS: &str = r#"[{1,2341001,262,0},{2,2341002,91,0},{3,2341003,262,1}]
[{4,2620001,4500,0}]
{5,2620002,262,0}, {6,2620003,26,0}
"#;

    #[test]
    fn test_counts_sub_records() {
        let index = GroupIndex::new(GROUPS);
        assert_eq!(index.len(), 3);
        assert_eq!(index.count(262), 3);
        assert_eq!(index.count(91), 1);
        assert_eq!(index.count(4500), 1);
        assert_eq!(index.count(26), 1);
    }

    #[test]
    fn test_no_match_is_zero() {
        let index = GroupIndex::new(GROUPS);
        assert_eq!(index.count(9999), 0);
        assert_eq!(GroupIndex::default().count(262), 0);
    }

    #[test]
    fn test_one_count_per_sub_record() {
        // Two references inside the same sub-record count once
        let index = GroupIndex::new("{1,262,262,0},{2,262,0}");
        assert_eq!(index.count(262), 2);
    }

    #[test]
    fn test_embedded_digits_match_textually() {
        // The second field is a radio id, but it is still matched as a talk group
        let index = GroupIndex::new("{7,2341001,5,0}");
        assert_eq!(index.count(2341001), 1);
        assert_eq!(index.count(234), 0);
    }
}
