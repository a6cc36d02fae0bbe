use std::{fmt, ops::RangeInclusive};

/// Identifiers in this band are reserved.
pub const RESERVED_RANGE: RangeInclusive<i64> = 4000..=5000;
/// The sentinel identifier, flagged separately regardless of any range.
pub const SPECIAL_ID: i64 = 9990;
/// Identifiers at or below this are never looked up in the grouping file.
pub const MIN_COUNTED_ID: i64 = 90;
/// Identifiers that never get a usage count even though they are above the minimum.
pub const UNCOUNTED_IDS: [i64; 3] = [4000, 5000, SPECIAL_ID];

/// Classification attached to every exported talk group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    Ordinary,
    Reserved,
    Special,
}

impl Class {
    /// Classify an identifier. The sentinel wins over the reserved range.
    pub fn of(id: i64) -> Self {
        if id == SPECIAL_ID {
            Class::Special
        } else if RESERVED_RANGE.contains(&id) {
            Class::Reserved
        } else {
            Class::Ordinary
        }
    }

    /// The numeric flag written to the list file.
    pub fn flag(self) -> u8 {
        match self {
            Class::Ordinary => 0,
            Class::Reserved => 1,
            Class::Special => 2,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Whether the grouping file should be consulted for this identifier at all.
pub fn should_count(id: i64) -> bool {
    id > MIN_COUNTED_ID && !UNCOUNTED_IDS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_range_is_inclusive() {
        assert_eq!(Class::of(3999), Class::Ordinary);
        assert_eq!(Class::of(4000), Class::Reserved);
        assert_eq!(Class::of(4500), Class::Reserved);
        assert_eq!(Class::of(5000), Class::Reserved);
        assert_eq!(Class::of(5001), Class::Ordinary);
    }

    #[test]
    fn test_sentinel_overrides() {
        assert_eq!(Class::of(9990), Class::Special);
        assert_eq!(Class::of(9990).flag(), 2);
        assert_eq!(Class::of(9989).flag(), 0);
    }

    #[test]
    fn test_flags() {
        assert_eq!(Class::of(1).to_string(), "0");
        assert_eq!(Class::of(4321).to_string(), "1");
        assert_eq!(Class::of(-4500).flag(), 0);
    }

    #[test]
    fn test_count_gate() {
        for id in [-5, 0, 1, 89, 90, 4000, 5000, 9990] {
            assert!(!should_count(id), "{} should not be counted", id);
        }
        for id in [91, 262, 3999, 4001, 4999, 5001, 9989, 9991, 2147483647] {
            assert!(should_count(id), "{} should be counted", id);
        }
    }
}
