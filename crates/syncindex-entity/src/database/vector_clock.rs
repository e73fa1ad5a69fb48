//! Vector clock value object.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Causal relation between two vector clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorClockComparison {
    /// Every entry is lower or equal, at least one strictly lower.
    Smaller,
    /// Every entry is greater or equal, at least one strictly greater.
    Greater,
    /// All entries are equal.
    Equal,
    /// Some entries are lower and some greater: concurrent histories.
    Simultaneous,
}

/// Map from client name to logical time. Missing clients count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorClock(BTreeMap<String, i64>);

impl VectorClock {
    /// Create an empty clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logical time of a client.
    pub fn set_clock(&mut self, client: impl Into<String>, value: i64) {
        self.0.insert(client.into(), value);
    }

    /// Logical time of a client; zero when absent.
    pub fn clock(&self, client: &str) -> i64 {
        self.0.get(client).copied().unwrap_or(0)
    }

    /// Logical time of a client if it has an entry.
    pub fn get(&self, client: &str) -> Option<i64> {
        self.0.get(client).copied()
    }

    /// Entries ordered by client name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(client, value)| (client.as_str(), *value))
    }

    /// Number of clients with an entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no client has an entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compare two clocks entry by entry.
    pub fn compare(&self, other: &VectorClock) -> VectorClockComparison {
        let mut smaller = false;
        let mut greater = false;

        for client in self.0.keys().chain(other.0.keys()) {
            match self.clock(client).cmp(&other.clock(client)) {
                Ordering::Less => smaller = true,
                Ordering::Greater => greater = true,
                Ordering::Equal => {}
            }
        }

        match (smaller, greater) {
            (false, false) => VectorClockComparison::Equal,
            (true, false) => VectorClockComparison::Smaller,
            (false, true) => VectorClockComparison::Greater,
            (true, true) => VectorClockComparison::Simultaneous,
        }
    }
}

impl fmt::Display for VectorClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, (client, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{client}{value}")?;
        }
        f.write_str(")")
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for VectorClock {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(c, v)| (c.into(), v)).collect())
    }
}
