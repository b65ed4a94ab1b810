use std::collections::HashSet;

use crate::error::{StoreError, StoreResult};

use super::state::Workspace;

/// Validate all workspace invariants. Returns an error if any invariant is violated.
pub fn validate_invariants(workspace: &Workspace) -> StoreResult<()> {
    // Invariant 1: Repository ids are unique across the workspace.
    let mut repo_ids: HashSet<&str> = HashSet::new();
    for repo in &workspace.repositories {
        if !repo_ids.insert(repo.id.as_str()) {
            return Err(StoreError::InvariantViolation(format!(
                "duplicate repository id: {}",
                repo.id
            )));
        }
    }

    // Invariant 2: File ids are unique within each repository.
    for repo in &workspace.repositories {
        let mut seen: HashSet<&str> = HashSet::new();
        for file in &repo.files {
            if !seen.insert(file.id.as_str()) {
                return Err(StoreError::InvariantViolation(format!(
                    "duplicate file id {} within repository {}",
                    file.id, repo.id
                )));
            }
        }
    }

    // Invariant 3: Selection validity — a set selection must name a repository
    // present in the sequence.
    if let Some(ref selected) = workspace.selected_repo {
        if workspace.repository(selected).is_none() {
            return Err(StoreError::InvariantViolation(format!(
                "selection points to nonexistent repository: {selected}"
            )));
        }
    }

    // Invariant 4: Edit target validity — a set edit target must name an
    // existing repository and a file present within it.
    if let Some(ref editing) = workspace.editing {
        match workspace.repository(&editing.repo_id) {
            None => {
                return Err(StoreError::InvariantViolation(format!(
                    "edit target points to nonexistent repository: {}",
                    editing.repo_id
                )));
            }
            Some(repo) => {
                if repo.file(&editing.file_id).is_none() {
                    return Err(StoreError::InvariantViolation(format!(
                        "edit target points to nonexistent file {} in repository {}",
                        editing.file_id, editing.repo_id
                    )));
                }
            }
        }
    }

    // Invariant 5: Post-login ownership — while a user is logged in, every
    // repository is owned by that user.
    if let Some(ref user) = workspace.current_user {
        for repo in &workspace.repositories {
            if repo.owner.id != user.id {
                return Err(StoreError::InvariantViolation(format!(
                    "repository {} owned by {} instead of current user {}",
                    repo.id, repo.owner.id, user.id
                )));
            }
        }
    }

    Ok(())
}
