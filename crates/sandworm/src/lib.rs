//! SANDWORM — in-memory state core for a lightweight repository-hosting demo.
//!
//! The crate owns the authoritative entity graph (users, repositories, files,
//! collaborators) for one session and exposes its only sanctioned mutation
//! surface, [`WorkspaceStore`]. Everything is synchronous and in-memory:
//! state lives for the lifetime of the store and is gone when it drops.

pub mod error;
pub mod events;
pub mod store;
pub mod views;
pub mod workspace;

pub use crate::error::{StoreError, StoreResult};
pub use crate::events::{EventLog, EventRecord, WorkspaceEvent};
pub use crate::store::WorkspaceStore;
pub use crate::views::{FileSummary, RepositoryCard};
pub use crate::workspace::{RepoFile, Repository, User, Workspace};
