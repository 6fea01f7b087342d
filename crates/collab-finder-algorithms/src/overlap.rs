//! Venue overlap (Jaccard) between two authors

use super::common::VenueMap;
use std::collections::BTreeSet;

/// Result of comparing two authors' venue sets
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JournalOverlap {
    /// Venues both authors published in (sorted)
    pub intersection: BTreeSet<String>,
    /// Venues either author published in (sorted)
    pub union: BTreeSet<String>,
    /// |intersection| / |union|, 0.0 when neither author has venues
    pub jaccard: f64,
}

/// Jaccard similarity of the venue sets of `u` and `v`
pub fn journal_overlap(venues: &VenueMap, u: &str, v: &str) -> JournalOverlap {
    let empty = BTreeSet::new();
    let ju = venues.get(u).unwrap_or(&empty);
    let jv = venues.get(v).unwrap_or(&empty);

    let intersection: BTreeSet<String> = ju.intersection(jv).cloned().collect();
    let union: BTreeSet<String> = ju.union(jv).cloned().collect();
    let jaccard = if union.is_empty() {
        0.0
    } else {
        intersection.len() as f64 / union.len() as f64
    };

    JournalOverlap { intersection, union, jaccard }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venues(entries: &[(&str, &[&str])]) -> VenueMap {
        entries
            .iter()
            .map(|(a, vs)| (a.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_jaccard_one_third() {
        let map = venues(&[("u", &["A", "B"]), ("v", &["B", "C"])]);
        let overlap = journal_overlap(&map, "u", "v");

        assert_eq!(overlap.intersection.iter().collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(overlap.union.iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert!((overlap.jaccard - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_union_is_zero() {
        let map = VenueMap::new();
        let overlap = journal_overlap(&map, "u", "v");
        assert!(overlap.intersection.is_empty());
        assert!(overlap.union.is_empty());
        assert_eq!(overlap.jaccard, 0.0);
    }

    #[test]
    fn test_one_sided_venues() {
        let map = venues(&[("u", &["A"])]);
        let overlap = journal_overlap(&map, "u", "v");
        assert_eq!(overlap.union.len(), 1);
        assert_eq!(overlap.jaccard, 0.0);
    }

    #[test]
    fn test_identical_sets() {
        let map = venues(&[("u", &["V1"]), ("v", &["V1"])]);
        assert_eq!(journal_overlap(&map, "u", "v").jaccard, 1.0);
    }
}
