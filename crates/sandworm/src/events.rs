//! Append-only record of workspace mutations.

pub mod event;
pub mod log;

pub use event::WorkspaceEvent;
pub use log::{EventLog, EventRecord};
