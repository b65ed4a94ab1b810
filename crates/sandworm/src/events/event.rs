//! Canonical event types for workspace mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workspace::state::{FileId, RepoId, UserId};

/// A mutation applied to the workspace.
///
/// Each event has a unique ID and timestamp. Events are append-only and
/// record every sanctioned mutation in invocation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorkspaceEvent {
    /// A user logged in; ownership of every repository was reassigned.
    UserLoggedIn {
        id: Uuid,
        timestamp: DateTime<Utc>,
        user_id: UserId,
    },
    /// The session returned to anonymous state.
    UserLoggedOut {
        id: Uuid,
        timestamp: DateTime<Utc>,
    },
    /// A repository was created and prepended to the sequence.
    RepositoryCreated {
        id: Uuid,
        timestamp: DateTime<Utc>,
        repo_id: RepoId,
    },
    /// A file was uploaded into a repository.
    FileUploaded {
        id: Uuid,
        timestamp: DateTime<Utc>,
        repo_id: RepoId,
        file_id: FileId,
    },
    /// A file's content was replaced via a save-edit.
    FileEdited {
        id: Uuid,
        timestamp: DateTime<Utc>,
        repo_id: RepoId,
        file_id: FileId,
    },
    /// A file was removed from a repository.
    FileDeleted {
        id: Uuid,
        timestamp: DateTime<Utc>,
        repo_id: RepoId,
        file_id: FileId,
    },
    /// A collaborator was added to a repository.
    CollaboratorAdded {
        id: Uuid,
        timestamp: DateTime<Utc>,
        repo_id: RepoId,
        user_id: UserId,
    },
    /// A collaborator was removed from a repository.
    CollaboratorRemoved {
        id: Uuid,
        timestamp: DateTime<Utc>,
        repo_id: RepoId,
        user_id: UserId,
    },
}

impl WorkspaceEvent {
    /// Returns the unique ID of this event.
    pub fn id(&self) -> Uuid {
        match self {
            WorkspaceEvent::UserLoggedIn { id, .. }
            | WorkspaceEvent::UserLoggedOut { id, .. }
            | WorkspaceEvent::RepositoryCreated { id, .. }
            | WorkspaceEvent::FileUploaded { id, .. }
            | WorkspaceEvent::FileEdited { id, .. }
            | WorkspaceEvent::FileDeleted { id, .. }
            | WorkspaceEvent::CollaboratorAdded { id, .. }
            | WorkspaceEvent::CollaboratorRemoved { id, .. } => *id,
        }
    }

    /// Returns the timestamp of this event.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            WorkspaceEvent::UserLoggedIn { timestamp, .. }
            | WorkspaceEvent::UserLoggedOut { timestamp, .. }
            | WorkspaceEvent::RepositoryCreated { timestamp, .. }
            | WorkspaceEvent::FileUploaded { timestamp, .. }
            | WorkspaceEvent::FileEdited { timestamp, .. }
            | WorkspaceEvent::FileDeleted { timestamp, .. }
            | WorkspaceEvent::CollaboratorAdded { timestamp, .. }
            | WorkspaceEvent::CollaboratorRemoved { timestamp, .. } => *timestamp,
        }
    }

    /// A short name for the event kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WorkspaceEvent::UserLoggedIn { .. } => "user_logged_in",
            WorkspaceEvent::UserLoggedOut { .. } => "user_logged_out",
            WorkspaceEvent::RepositoryCreated { .. } => "repository_created",
            WorkspaceEvent::FileUploaded { .. } => "file_uploaded",
            WorkspaceEvent::FileEdited { .. } => "file_edited",
            WorkspaceEvent::FileDeleted { .. } => "file_deleted",
            WorkspaceEvent::CollaboratorAdded { .. } => "collaborator_added",
            WorkspaceEvent::CollaboratorRemoved { .. } => "collaborator_removed",
        }
    }
}
