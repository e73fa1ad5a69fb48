//! File domain entities.

pub mod content;
pub mod history;
pub mod version;

pub use content::FileContent;
pub use history::PartialFileHistory;
pub use version::{FileStatus, FileType, FileVersion};
