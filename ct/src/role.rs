//! Role history within a single employer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dial::DialSelector;
use crate::tenure::{compute_tenure_at, split_period};

/// One title held at an employer, with the period it was held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleHistoryEntry {
    pub role: String,
    pub period: String,
}

impl RoleHistoryEntry {
    pub fn new(role: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            period: period.into(),
        }
    }

    /// Tenure label for this role alone
    pub fn tenure_at(&self, today: NaiveDate) -> String {
        compute_tenure_at(&self.period, today)
    }
}

/// Chronologically ordered roles at one employer, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleHistory(Vec<RoleHistoryEntry>);

impl RoleHistory {
    pub fn new(entries: Vec<RoleHistoryEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[RoleHistoryEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RoleHistoryEntry> {
        self.0.get(index)
    }

    /// The most recent role
    pub fn latest(&self) -> Option<&RoleHistoryEntry> {
        self.0.last()
    }

    /// Synthetic period from the first role's start to the last role's end
    ///
    /// Gaps and overlaps between intermediate roles do not affect it.
    pub fn aggregate_period(&self) -> Option<String> {
        let first = self.0.first()?;
        let last = self.0.last()?;
        let (start, _) = split_period(&first.period);
        let (_, end) = split_period(&last.period);
        let period = format!("{} – {}", start, end);
        debug!(%period, roles = self.0.len(), "RoleHistory::aggregate_period: built");
        Some(period)
    }

    /// Total tenure across all roles, `None` when there are no roles
    pub fn aggregate_tenure_at(&self, today: NaiveDate) -> Option<String> {
        self.aggregate_period().map(|period| compute_tenure_at(&period, today))
    }

    /// A fresh dial over these roles, `None` when there are no roles
    pub fn dial(&self) -> Option<DialSelector> {
        DialSelector::new(self.0.len())
    }
}

impl From<Vec<RoleHistoryEntry>> for RoleHistory {
    fn from(entries: Vec<RoleHistoryEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<RoleHistoryEntry> for RoleHistory {
    fn from_iter<I: IntoIterator<Item = RoleHistoryEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RoleHistory {
    type Item = &'a RoleHistoryEntry;
    type IntoIter = std::slice::Iter<'a, RoleHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
