//! Workspace state shapes, invariants, and demo seed data.

pub mod invariants;
pub mod seed;
pub mod state;

pub use invariants::validate_invariants;
pub use seed::demo_workspace;
pub use state::{EditTarget, FileId, RepoFile, RepoId, Repository, User, UserId, Workspace};
