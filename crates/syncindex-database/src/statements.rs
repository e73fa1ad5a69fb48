//! Every SQL statement the query layer issues.
//!
//! Statements are plain parameterized SQL kept in one place so the schema
//! contract can be audited here. Parameter order is documented on each
//! constant. Statements that feed a grouping step carry an `ORDER BY` whose
//! leading columns are the grouping key; keep them in sync with the callers.

/// Head, non-deleted version of every history.
///
/// Params: `DELETED` status. Within a path the lowest history id comes last
/// so it wins when rows are collected into a map, matching
/// [`HEAD_VERSION_BY_PATH`].
pub const CURRENT_FILE_TREE: &str = "\
    SELECT fv.* FROM fileversion fv \
    WHERE fv.status <> ? \
      AND fv.version = (SELECT MAX(fv1.version) FROM fileversion fv1 \
                        WHERE fv1.filehistory_id = fv.filehistory_id) \
    ORDER BY fv.path, fv.filehistory_id DESC";

/// Highest logical time of one client among database versions of a status.
///
/// Params: `DIRTY` status, client name. Yields `NULL` when nothing matches.
pub const MAX_VECTOR_CLOCK_FOR_STATUS: &str = "\
    SELECT MAX(vc.logicaltime) AS logicaltime \
    FROM databaseversion dbv \
    JOIN databaseversion_vectorclock vc ON vc.databaseversion_id = dbv.id \
    WHERE dbv.status = ? AND vc.client = ?";

/// Head version of the history currently at a path, unless deleted.
///
/// Params: path, `DELETED` status.
pub const HEAD_VERSION_BY_PATH: &str = "\
    SELECT fv.* FROM fileversion fv \
    WHERE fv.path = ? \
      AND fv.status <> ? \
      AND fv.version = (SELECT MAX(fv1.version) FROM fileversion fv1 \
                        WHERE fv1.filehistory_id = fv.filehistory_id) \
    ORDER BY fv.filehistory_id \
    LIMIT 1";

/// Head version of a history, unless deleted.
///
/// Params: file history id, `DELETED` status.
pub const HEAD_VERSION_BY_HISTORY: &str = "\
    SELECT fv.* FROM fileversion fv \
    WHERE fv.filehistory_id = ? \
      AND fv.status <> ? \
      AND fv.version = (SELECT MAX(fv1.version) FROM fileversion fv1 \
                        WHERE fv1.filehistory_id = fv.filehistory_id)";

/// Every file version, grouped by history.
pub const ALL_FILE_VERSIONS: &str = "\
    SELECT * FROM fileversion \
    ORDER BY filehistory_id, version";

/// All versions of the history whose head, non-deleted version is at a path.
///
/// Params: path, `DELETED` status.
pub const FILE_HISTORY_BY_PATH: &str = "\
    SELECT fv0.* FROM fileversion_master fv0 \
    WHERE fv0.filehistory_id = ( \
        SELECT fv1.filehistory_id FROM fileversion fv1 \
        WHERE fv1.path = ? \
          AND fv1.status <> ? \
          AND fv1.version = (SELECT MAX(fv2.version) FROM fileversion fv2 \
                             WHERE fv2.filehistory_id = fv1.filehistory_id) \
        ORDER BY fv1.filehistory_id \
        LIMIT 1) \
    ORDER BY fv0.version";

/// Distinct multichunks holding any chunk of a file content.
///
/// Params: file checksum.
pub const MULTICHUNKS_FOR_CONTENT: &str = "\
    SELECT DISTINCT mcc.multichunk_id AS id \
    FROM filecontent fc \
    JOIN filecontent_chunk fcc ON fc.checksum = fcc.filecontent_checksum \
    JOIN multichunk_chunk mcc ON fcc.chunk_checksum = mcc.chunk_checksum \
    WHERE fc.checksum = ? \
    ORDER BY mcc.multichunk_id";

/// A file content and its chunks in position order.
///
/// Params: file checksum. Content without chunks yields one row with a
/// `NULL` chunk checksum.
pub const CONTENT_WITH_CHUNKS: &str = "\
    SELECT fc.checksum, fc.size, fcc.chunk_checksum \
    FROM filecontent fc \
    LEFT JOIN filecontent_chunk fcc ON fc.checksum = fcc.filecontent_checksum \
    WHERE fc.checksum = ? \
    ORDER BY fcc.num ASC";

/// A file content without its chunks.
///
/// Params: file checksum.
pub const CONTENT_BY_CHECKSUM: &str = "\
    SELECT fc.checksum, fc.size FROM filecontent fc \
    WHERE fc.checksum = ?";

/// The database version with the greatest insertion id.
pub const LAST_DATABASE_VERSION: &str = "\
    SELECT dbv.id, dbv.client, dbv.localtime FROM databaseversion dbv \
    ORDER BY dbv.id DESC \
    LIMIT 1";

/// Vector clock entries of one database version.
///
/// Params: database version id.
pub const VECTOR_CLOCK_BY_DATABASE_VERSION: &str = "\
    SELECT client, logicaltime FROM databaseversion_vectorclock \
    WHERE databaseversion_id = ? \
    ORDER BY client";

/// The multichunk holding a chunk.
///
/// Params: chunk checksum.
pub const MULTICHUNK_FOR_CHUNK: &str = "\
    SELECT mcc.multichunk_id AS id \
    FROM multichunk_chunk mcc \
    JOIN multichunk mc ON mc.id = mcc.multichunk_id \
    WHERE mcc.chunk_checksum = ? \
    LIMIT 1";

/// A multichunk, if reachable from a file version owned by a database
/// version of the given status.
///
/// Params: database version status, multichunk id.
pub const MULTICHUNK_BY_ID_AND_STATUS: &str = "\
    SELECT DISTINCT mc.id \
    FROM databaseversion dbv \
    JOIN filehistory fh ON dbv.id = fh.databaseversion_id \
    JOIN fileversion fv ON fh.id = fv.filehistory_id \
    JOIN filecontent fc ON fv.filecontent_checksum = fc.checksum \
    JOIN filecontent_chunk fcc ON fc.checksum = fcc.filecontent_checksum \
    JOIN chunk c ON fcc.chunk_checksum = c.checksum \
    JOIN multichunk_chunk mcc ON c.checksum = mcc.chunk_checksum \
    JOIN multichunk mc ON mcc.multichunk_id = mc.id \
    WHERE dbv.status = ? AND mc.id = ? \
    LIMIT 1";

/// One row per (database version, vector clock entry), grouped by version.
pub const LOCAL_DATABASE_BRANCH: &str = "\
    SELECT dbv.id, dbv.localtime, dbv.client, \
           vc.client AS vc_client, vc.logicaltime AS vc_logicaltime \
    FROM databaseversion dbv \
    JOIN databaseversion_vectorclock vc ON vc.databaseversion_id = dbv.id \
    ORDER BY dbv.id ASC, vc.client ASC";

/// Remote database names in insertion order.
pub const KNOWN_DATABASES: &str = "\
    SELECT database_name FROM known_databases \
    ORDER BY id";

/// Connectivity probe.
pub const HEALTH_CHECK: &str = "SELECT 1";

/// Administrative directive issued before closing the connection.
pub const SHUTDOWN_DIRECTIVE: &str = "PRAGMA optimize";
