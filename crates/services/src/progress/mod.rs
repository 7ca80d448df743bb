mod service;
mod snapshot;

// Public API of the progress subsystem.
pub use crate::error::ProgressError;
pub use service::ProgressService;
pub use snapshot::{ProgressSnapshot, SectionProgress};
