//! Score fusion weights
//!
//! The three weights always sum to 1. Editing any component renormalizes the
//! whole vector instead of rejecting the edit.

use crate::error::{CollabError, CollabResult};
use serde::{Deserialize, Serialize};

/// Totals at or below this are treated as "all zero"
const MIN_TOTAL: f64 = 1e-9;

/// Weights for journal Jaccard, Adamic–Adar and common-neighbor scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub journal: f64,
    pub adamic_adar: f64,
    pub common_neighbors: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            journal: 0.5,
            adamic_adar: 0.3,
            common_neighbors: 0.2,
        }
    }
}

fn sanitize(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 {
        x
    } else {
        0.0
    }
}

impl Weights {
    /// Build a weight vector scaled to sum 1.
    ///
    /// Negative or non-finite inputs count as 0. If nothing positive remains
    /// the default (0.5, 0.3, 0.2) is used.
    pub fn new(journal: f64, adamic_adar: f64, common_neighbors: f64) -> Self {
        Self {
            journal: sanitize(journal),
            adamic_adar: sanitize(adamic_adar),
            common_neighbors: sanitize(common_neighbors),
        }
        .renormalized()
    }

    /// Like [`Weights::new`] but rejects negative or non-finite components
    pub fn try_new(journal: f64, adamic_adar: f64, common_neighbors: f64) -> CollabResult<Self> {
        let raw = Self {
            journal,
            adamic_adar,
            common_neighbors,
        };
        raw.validate()?;
        Ok(raw.renormalized())
    }

    pub fn sum(&self) -> f64 {
        self.journal + self.adamic_adar + self.common_neighbors
    }

    /// Scale so the components sum to 1
    pub fn renormalized(self) -> Self {
        let total = self.sum();
        if total <= MIN_TOTAL {
            return Self::default();
        }
        Self {
            journal: self.journal / total,
            adamic_adar: self.adamic_adar / total,
            common_neighbors: self.common_neighbors / total,
        }
    }

    /// Replace one component and renormalize; bad values count as 0 like [`Weights::new`]
    pub fn with_journal(self, journal: f64) -> Self {
        Self::new(journal, self.adamic_adar, self.common_neighbors)
    }

    pub fn with_adamic_adar(self, adamic_adar: f64) -> Self {
        Self::new(self.journal, adamic_adar, self.common_neighbors)
    }

    pub fn with_common_neighbors(self, common_neighbors: f64) -> Self {
        Self::new(self.journal, self.adamic_adar, common_neighbors)
    }

    pub fn validate(&self) -> CollabResult<()> {
        for (name, value) in [
            ("journal", self.journal),
            ("adamic_adar", self.adamic_adar),
            ("common_neighbors", self.common_neighbors),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CollabError::InvalidWeights(format!(
                    "{} weight must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Weighted sum of the three normalized signals
    pub fn combine(&self, journal: f64, adamic_adar: f64, common_neighbors: f64) -> f64 {
        self.adamic_adar * adamic_adar + self.common_neighbors * common_neighbors + self.journal * journal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_default_sums_to_one() {
        let w = Weights::default();
        assert!((w.sum() - 1.0).abs() < EPS);
        assert_eq!((w.journal, w.adamic_adar, w.common_neighbors), (0.5, 0.3, 0.2));
    }

    #[test]
    fn test_doubling_one_component_renormalizes() {
        let w = Weights::default();

        let edited = w.with_journal(w.journal * 2.0);
        assert!((edited.sum() - 1.0).abs() < EPS);
        assert!((edited.journal - 1.0 / 1.5).abs() < EPS);
        assert!((edited.adamic_adar - 0.3 / 1.5).abs() < EPS);

        let edited = w.with_adamic_adar(w.adamic_adar * 2.0);
        assert!((edited.sum() - 1.0).abs() < EPS);

        let edited = w.with_common_neighbors(w.common_neighbors * 2.0);
        assert!((edited.sum() - 1.0).abs() < EPS);
        assert!((edited.common_neighbors - 0.4 / 1.2).abs() < EPS);
    }

    #[test]
    fn test_zero_total_resets_to_default() {
        assert_eq!(Weights::new(0.0, 0.0, 0.0), Weights::default());
        assert_eq!(Weights::default().with_journal(0.0).with_adamic_adar(0.0).with_common_neighbors(0.0), Weights::default());
    }

    #[test]
    fn test_new_sanitizes_bad_components() {
        let w = Weights::new(-1.0, f64::NAN, 2.0);
        assert_eq!(w.journal, 0.0);
        assert_eq!(w.adamic_adar, 0.0);
        assert!((w.common_neighbors - 1.0).abs() < EPS);
    }

    #[test]
    fn test_try_new_rejects_negative() {
        assert!(matches!(Weights::try_new(0.5, -0.1, 0.6), Err(CollabError::InvalidWeights(_))));
        let w = Weights::try_new(1.0, 1.0, 2.0).unwrap();
        assert!((w.common_neighbors - 0.5).abs() < EPS);
    }

    #[test]
    fn test_edits_ignore_nan_and_negative_values() {
        let w = Weights::default().with_journal(f64::NAN);
        assert!((w.sum() - 1.0).abs() < EPS);
        assert_eq!(w.journal, 0.0);
        assert!((w.adamic_adar - 0.6).abs() < EPS);
        assert!((w.common_neighbors - 0.4).abs() < EPS);

        let w = Weights::default().with_journal(-0.4);
        assert!((w.sum() - 1.0).abs() < EPS);
        assert!(w.validate().is_ok());
        assert_eq!(w.journal, 0.0);
        for part in [w.journal, w.adamic_adar, w.common_neighbors] {
            assert!((0.0..=1.0).contains(&part));
        }

        let w = Weights::default().with_adamic_adar(f64::INFINITY).with_common_neighbors(-1.0);
        assert!((w.sum() - 1.0).abs() < EPS);
        assert!((w.journal - 1.0).abs() < EPS);
    }

    #[test]
    fn test_combine() {
        let w = Weights::default();
        assert!((w.combine(1.0, 1.0, 1.0) - 1.0).abs() < EPS);
        assert!((w.combine(1.0, 0.0, 0.0) - 0.5).abs() < EPS);
    }
}
