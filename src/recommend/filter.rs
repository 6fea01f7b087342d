//! Venue filter applied to candidate shared venues

use std::collections::BTreeSet;

/// Case-insensitive set of venue names a recommendation must share
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JournalFilter {
    venues: BTreeSet<String>,
}

impl JournalFilter {
    /// Build from venue names; blank names are dropped.
    ///
    /// Returns `None` when nothing remains, meaning "no filter".
    pub fn new<I, S>(venues: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let venues: BTreeSet<String> = venues
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();
        if venues.is_empty() {
            None
        } else {
            Some(Self { venues })
        }
    }

    /// Parse a `;`-separated list such as `"IEEE Access; Nature"`
    pub fn parse(text: &str) -> Option<Self> {
        Self::new(text.split(';'))
    }

    /// True when any of `shared` is in the filter, ignoring case
    pub fn matches_any<S: AsRef<str>>(&self, shared: &[S]) -> bool {
        shared
            .iter()
            .any(|v| self.venues.contains(&v.as_ref().trim().to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}
