//! Folder comparison: which audio files exist in one tree but not the other,
//! and copying them across.

mod copy;
mod differ;
mod report;

pub use copy::CopyReport;
pub use differ::{FolderDiff, FolderDiffer, SyncDirection};
pub use report::DiffReport;
