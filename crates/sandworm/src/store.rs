//! The workspace store: the only sanctioned mutation surface.
//!
//! All operations are synchronous and total. Each one applies fully before
//! the next is observed, refreshes the owning repository through a single
//! shared update path, and appends a matching record to the event log.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::events::{EventLog, WorkspaceEvent};
use crate::views;
use crate::workspace::state::{new_id, EditTarget, RepoFile, Repository, User, Workspace};
use crate::workspace::seed::demo_workspace;

/// Owns a [`Workspace`] and exposes its mutation operations.
///
/// Multiple independent stores can coexist (one per test, one per session);
/// nothing is held in ambient globals.
pub struct WorkspaceStore {
    workspace: Workspace,
    events: EventLog,
}

impl WorkspaceStore {
    /// Create a store over an empty workspace.
    pub fn new() -> Self {
        Self::with_workspace(Workspace::new())
    }

    /// Create a store over an existing workspace.
    pub fn with_workspace(workspace: Workspace) -> Self {
        WorkspaceStore {
            workspace,
            events: EventLog::new(),
        }
    }

    /// Create a store pre-populated with the demo seed repositories.
    pub fn with_demo_data() -> Self {
        Self::with_workspace(demo_workspace())
    }

    /// Read-only view of the current workspace snapshot.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// The mutation event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The currently selected repository, if any.
    pub fn selected_repository(&self) -> Option<&Repository> {
        self.workspace.selected_repository()
    }

    // --- Session ---

    /// Log a user in. Any user value is accepted; ownership of every
    /// repository in the workspace is reassigned to the new user (demo mode:
    /// all seed data belongs to whoever logs in). Files, collaborators, and
    /// the selection are untouched.
    pub fn login(&mut self, user: User) -> &User {
        tracing::info!(user = %user.username, "user logged in");
        for repo in &mut self.workspace.repositories {
            repo.owner = user.clone();
        }
        self.events.append(WorkspaceEvent::UserLoggedIn {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_id: user.id.clone(),
        });
        self.workspace.current_user.insert(user)
    }

    /// Return the session to anonymous state: clears the current user, the
    /// selection, any edit target, and the search term. Idempotent.
    pub fn logout(&mut self) {
        if self.workspace.current_user.take().is_some() {
            tracing::info!("user logged out");
            self.events.append(WorkspaceEvent::UserLoggedOut {
                id: Uuid::new_v4(),
                timestamp: Utc::now(),
            });
        }
        self.workspace.selected_repo = None;
        self.workspace.editing = None;
        self.workspace.search_term.clear();
    }

    // --- Repositories ---

    /// Create a repository owned by the current user and prepend it to the
    /// sequence (most-recent-first ordering).
    pub fn create_repository(
        &mut self,
        name: &str,
        description: &str,
        is_private: bool,
    ) -> StoreResult<&Repository> {
        if name.is_empty() {
            return Err(StoreError::InvalidInput(
                "repository name must not be empty".to_string(),
            ));
        }
        let owner = self.current_user()?.clone();
        let now = Utc::now();
        let repo = Repository {
            id: new_id(),
            name: name.to_string(),
            description: description.to_string(),
            owner,
            collaborators: Vec::new(),
            files: Vec::new(),
            created_at: now,
            updated_at: now,
            is_private,
        };
        tracing::info!(repo = %repo.name, id = %repo.id, "repository created");
        self.events.append(WorkspaceEvent::RepositoryCreated {
            id: Uuid::new_v4(),
            timestamp: now,
            repo_id: repo.id.clone(),
        });
        self.workspace.repositories.insert(0, repo);
        Ok(&self.workspace.repositories[0])
    }

    /// Select a repository for detail-view operations. Pure navigation.
    pub fn select_repository(&mut self, repo_id: &str) -> StoreResult<()> {
        if self.workspace.repository(repo_id).is_none() {
            return Err(StoreError::NotFound(format!("repository {repo_id}")));
        }
        self.workspace.selected_repo = Some(repo_id.to_string());
        Ok(())
    }

    /// Clear the selection (and any edit target tied to it). Pure navigation.
    pub fn deselect_repository(&mut self) {
        self.workspace.selected_repo = None;
        self.workspace.editing = None;
    }

    // --- Files ---

    /// Upload a file into a repository. The path is the name rooted at `/`
    /// and the size is the byte length of the content.
    pub fn upload_file(
        &mut self,
        repo_id: &str,
        name: &str,
        content: &str,
    ) -> StoreResult<&RepoFile> {
        if name.is_empty() {
            return Err(StoreError::InvalidInput(
                "file name must not be empty".to_string(),
            ));
        }
        let author = self.current_user()?.clone();
        let file_id = self.apply_repository_update(repo_id, |repo, now| {
            let file = RepoFile::new(name, content, author, now);
            let file_id = file.id.clone();
            repo.files.push(file);
            Ok((file_id, true))
        })?;
        tracing::debug!(repo = %repo_id, file = %name, "file uploaded");
        self.events.append(WorkspaceEvent::FileUploaded {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            repo_id: repo_id.to_string(),
            file_id: file_id.clone(),
        });
        self.file(repo_id, &file_id)
    }

    /// Establish the edit target for a subsequent [`save_edit`] and return
    /// the file's current content.
    ///
    /// [`save_edit`]: WorkspaceStore::save_edit
    pub fn begin_edit(&mut self, repo_id: &str, file_id: &str) -> StoreResult<&str> {
        self.file(repo_id, file_id)?;
        self.workspace.editing = Some(EditTarget {
            repo_id: repo_id.to_string(),
            file_id: file_id.to_string(),
        });
        self.file(repo_id, file_id).map(|f| f.content.as_str())
    }

    /// Replace the content of the file established by [`begin_edit`].
    ///
    /// Only the target file changes: content, author, timestamp, and size
    /// (recomputed from the new content's byte length). The edit target is
    /// consumed.
    ///
    /// [`begin_edit`]: WorkspaceStore::begin_edit
    pub fn save_edit(&mut self, new_content: &str) -> StoreResult<&RepoFile> {
        let author = self.current_user()?.clone();
        let target = self
            .workspace
            .editing
            .take()
            .ok_or_else(|| StoreError::InvalidInput("no file is being edited".to_string()))?;
        self.apply_repository_update(&target.repo_id, |repo, now| {
            let file = repo
                .files
                .iter_mut()
                .find(|f| f.id == target.file_id)
                .ok_or_else(|| StoreError::NotFound(format!("file {}", target.file_id)))?;
            file.content = new_content.to_string();
            file.size = new_content.len() as u64;
            file.updated_at = now;
            file.updated_by = author;
            Ok(((), true))
        })?;
        tracing::debug!(repo = %target.repo_id, file = %target.file_id, "file edited");
        self.events.append(WorkspaceEvent::FileEdited {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            repo_id: target.repo_id.clone(),
            file_id: target.file_id.clone(),
        });
        self.file(&target.repo_id, &target.file_id)
    }

    /// Remove a file from a repository. Filter semantics: an absent id is a
    /// harmless no-op, so the operation is idempotent.
    pub fn delete_file(&mut self, repo_id: &str, file_id: &str) -> StoreResult<()> {
        let removed = self.apply_repository_update(repo_id, |repo, _now| {
            let before = repo.files.len();
            repo.files.retain(|f| f.id != file_id);
            let removed = repo.files.len() != before;
            Ok((removed, removed))
        })?;
        if removed {
            if self
                .workspace
                .editing
                .as_ref()
                .is_some_and(|t| t.file_id == file_id)
            {
                self.workspace.editing = None;
            }
            tracing::debug!(repo = %repo_id, file = %file_id, "file deleted");
            self.events.append(WorkspaceEvent::FileDeleted {
                id: Uuid::new_v4(),
                timestamp: Utc::now(),
                repo_id: repo_id.to_string(),
                file_id: file_id.to_string(),
            });
        }
        Ok(())
    }

    // --- Collaborators ---

    /// Add a collaborator by email. A fresh user is synthesized with the
    /// username taken from the part of the email before `'@'` (the whole
    /// string when there is none). Duplicate emails are permitted.
    pub fn add_collaborator(&mut self, repo_id: &str, email: &str) -> StoreResult<&User> {
        if email.is_empty() {
            return Err(StoreError::InvalidInput(
                "collaborator email must not be empty".to_string(),
            ));
        }
        let username = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: new_id(),
            username,
            email: email.to_string(),
            avatar: None,
        };
        let user_id = user.id.clone();
        self.apply_repository_update(repo_id, move |repo, _now| {
            repo.collaborators.push(user);
            Ok(((), true))
        })?;
        tracing::debug!(repo = %repo_id, email = %email, "collaborator added");
        self.events.append(WorkspaceEvent::CollaboratorAdded {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            repo_id: repo_id.to_string(),
            user_id: user_id.clone(),
        });
        let repo = self
            .workspace
            .repository(repo_id)
            .ok_or_else(|| StoreError::NotFound(format!("repository {repo_id}")))?;
        repo.collaborators
            .iter()
            .find(|c| c.id == user_id)
            .ok_or_else(|| StoreError::NotFound(format!("collaborator {user_id}")))
    }

    /// Remove a collaborator by user id. No-op if absent.
    pub fn remove_collaborator(&mut self, repo_id: &str, user_id: &str) -> StoreResult<()> {
        let removed = self.apply_repository_update(repo_id, |repo, _now| {
            let before = repo.collaborators.len();
            repo.collaborators.retain(|c| c.id != user_id);
            let removed = repo.collaborators.len() != before;
            Ok((removed, removed))
        })?;
        if removed {
            tracing::debug!(repo = %repo_id, user = %user_id, "collaborator removed");
            self.events.append(WorkspaceEvent::CollaboratorRemoved {
                id: Uuid::new_v4(),
                timestamp: Utc::now(),
                repo_id: repo_id.to_string(),
                user_id: user_id.to_string(),
            });
        }
        Ok(())
    }

    // --- Search ---

    /// Set the dashboard search term.
    pub fn set_search_term(&mut self, term: &str) {
        self.workspace.search_term = term.to_string();
    }

    /// Repositories matching the current search term, in workspace order.
    pub fn filtered_repositories(&self) -> Vec<&Repository> {
        views::filter_repositories(&self.workspace.repositories, &self.workspace.search_term)
    }

    // --- Internals ---

    fn current_user(&self) -> StoreResult<&User> {
        self.workspace
            .current_user
            .as_ref()
            .ok_or(StoreError::NotAuthenticated)
    }

    fn file(&self, repo_id: &str, file_id: &str) -> StoreResult<&RepoFile> {
        let repo = self
            .workspace
            .repository(repo_id)
            .ok_or_else(|| StoreError::NotFound(format!("repository {repo_id}")))?;
        repo.file(file_id)
            .ok_or_else(|| StoreError::NotFound(format!("file {file_id}")))
    }

    /// Locate a repository by id and apply a structural update to it.
    ///
    /// The closure reports whether it changed the repository; on change,
    /// `updated_at` is bumped to the captured wall-clock instant. Every
    /// repository-mutating operation goes through here so the update rule
    /// cannot diverge between operations.
    fn apply_repository_update<R>(
        &mut self,
        repo_id: &str,
        f: impl FnOnce(&mut Repository, DateTime<Utc>) -> StoreResult<(R, bool)>,
    ) -> StoreResult<R> {
        let now = Utc::now();
        let repo = self
            .workspace
            .repository_mut(repo_id)
            .ok_or_else(|| StoreError::NotFound(format!("repository {repo_id}")))?;
        let (out, changed) = f(repo, now)?;
        if changed {
            repo.updated_at = now;
        }
        Ok(out)
    }
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::new()
    }
}
