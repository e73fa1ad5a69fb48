//! Database version entities: vector clocks, headers and branches.

pub mod branch;
pub mod header;
pub mod status;
pub mod vector_clock;

pub use branch::DatabaseBranch;
pub use header::DatabaseVersionHeader;
pub use status::DatabaseVersionStatus;
pub use vector_clock::{VectorClock, VectorClockComparison};
