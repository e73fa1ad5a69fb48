//! Database branch: the ordered history of database versions.

use serde::{Deserialize, Serialize};

use super::header::DatabaseVersionHeader;
use super::vector_clock::VectorClock;

/// Database version headers in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatabaseBranch {
    headers: Vec<DatabaseVersionHeader>,
}

impl DatabaseBranch {
    /// Create an empty branch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header at the end of the branch.
    pub fn add(&mut self, header: DatabaseVersionHeader) {
        self.headers.push(header);
    }

    /// Header at a position.
    pub fn get(&self, index: usize) -> Option<&DatabaseVersionHeader> {
        self.headers.get(index)
    }

    /// The most recent header.
    pub fn last(&self) -> Option<&DatabaseVersionHeader> {
        self.headers.last()
    }

    /// Find the header carrying exactly this vector clock.
    pub fn find_by_vector_clock(&self, vector_clock: &VectorClock) -> Option<&DatabaseVersionHeader> {
        self.headers
            .iter()
            .find(|header| header.vector_clock == *vector_clock)
    }

    /// All headers in order.
    pub fn headers(&self) -> &[DatabaseVersionHeader] {
        &self.headers
    }

    /// Iterate over the headers in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DatabaseVersionHeader> {
        self.headers.iter()
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether the branch is empty.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl<'a> IntoIterator for &'a DatabaseBranch {
    type Item = &'a DatabaseVersionHeader;
    type IntoIter = std::slice::Iter<'a, DatabaseVersionHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}
