//! Reconstruction of the local database branch from vector clock rows.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use syncindex_entity::database::{DatabaseBranch, DatabaseVersionHeader};

use crate::grouping::group_consecutive;

/// One (database version, vector clock entry) pair as returned by
/// [`LOCAL_DATABASE_BRANCH`](crate::statements::LOCAL_DATABASE_BRANCH).
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BranchRow {
    /// Insertion id of the database version.
    pub id: i64,
    /// Client that committed the version.
    pub client: String,
    /// Commit time.
    pub localtime: DateTime<Utc>,
    /// Client of this clock entry.
    pub vc_client: String,
    /// Logical time of this clock entry.
    pub vc_logicaltime: i64,
}

/// Fold rows ordered by `(id, vc_client)` into a branch.
///
/// Each run of rows sharing an id becomes one header; its client and time
/// come from the first row of the run and its clock collects every entry of
/// the run. Header order follows row order.
pub fn reconstruct_branch(rows: impl IntoIterator<Item = BranchRow>) -> DatabaseBranch {
    let mut branch = DatabaseBranch::new();

    for (_, group) in group_consecutive(rows, |row| row.id) {
        let mut rows = group.into_iter().peekable();
        let Some(first) = rows.peek() else {
            continue;
        };

        let mut header = DatabaseVersionHeader::new(first.client.clone(), first.localtime);
        for row in rows {
            header.vector_clock.set_clock(row.vc_client, row.vc_logicaltime);
        }

        branch.add(header);
    }

    branch
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn row(id: i64, client: &str, vc_client: &str, vc_logicaltime: i64) -> BranchRow {
        BranchRow {
            id,
            client: client.to_string(),
            localtime: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
            vc_client: vc_client.to_string(),
            vc_logicaltime,
        }
    }

    #[test]
    fn test_two_versions_two_clients() {
        let branch = reconstruct_branch(vec![
            row(1, "A", "A", 1),
            row(1, "A", "B", 2),
            row(2, "B", "A", 1),
            row(2, "B", "B", 3),
        ]);

        assert_eq!(branch.len(), 2);

        let first = branch.get(0).unwrap();
        assert_eq!(first.client, "A");
        assert_eq!(first.vector_clock.to_string(), "(A1,B2)");

        let second = branch.get(1).unwrap();
        assert_eq!(second.client, "B");
        assert_eq!(second.vector_clock.to_string(), "(A1,B3)");
        assert_eq!(second.date, Utc.timestamp_opt(1_700_000_002, 0).unwrap());
    }

    #[test]
    fn test_single_entry_version_is_flushed() {
        let branch = reconstruct_branch(vec![row(7, "C", "C", 4)]);
        assert_eq!(branch.len(), 1);
        assert_eq!(branch.last().unwrap().vector_clock.clock("C"), 4);
    }

    #[test]
    fn test_no_rows_gives_empty_branch() {
        assert!(reconstruct_branch(Vec::new()).is_empty());
    }
}
