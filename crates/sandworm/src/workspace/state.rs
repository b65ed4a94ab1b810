use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user.
pub type UserId = String;

/// Unique identifier for a repository.
pub type RepoId = String;

/// Unique identifier for a file within a repository.
pub type FileId = String;

/// An account known to the workspace: the logged-in user or a collaborator.
///
/// Users are immutable once created; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A file owned by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoFile {
    pub id: FileId,
    pub name: String,
    pub path: String,
    pub content: String,
    /// Byte length of `content` at write time.
    pub size: u64,
    pub updated_at: DateTime<Utc>,
    pub updated_by: User,
}

impl RepoFile {
    /// Build a fresh file from a name and content, authored by `author`.
    ///
    /// The path is always the name rooted at `/`, and the size is the byte
    /// length of the content.
    pub fn new(name: &str, content: &str, author: User, now: DateTime<Utc>) -> Self {
        RepoFile {
            id: new_id(),
            name: name.to_string(),
            path: format!("/{name}"),
            content: content.to_string(),
            size: content.len() as u64,
            updated_at: now,
            updated_by: author,
        }
    }
}

/// A named collection of files with an owner and collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: RepoId,
    pub name: String,
    pub description: String,
    pub owner: User,
    pub collaborators: Vec<User>,
    pub files: Vec<RepoFile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_private: bool,
}

impl Repository {
    /// Look up a file by id.
    pub fn file(&self, file_id: &str) -> Option<&RepoFile> {
        self.files.iter().find(|f| f.id == file_id)
    }
}

/// The file currently being edited: established by a begin-edit step and
/// consumed by save-edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTarget {
    pub repo_id: RepoId,
    pub file_id: FileId,
}

/// The root in-memory state container for the current session.
///
/// Holds the authenticated user, the repository sequence (newest-created
/// first), the current selection, and transient view state (search term,
/// edit target). All mutation goes through
/// [`WorkspaceStore`](crate::store::WorkspaceStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub current_user: Option<User>,
    pub repositories: Vec<Repository>,
    pub selected_repo: Option<RepoId>,
    pub search_term: String,
    pub editing: Option<EditTarget>,
}

impl Workspace {
    /// Create an empty, anonymous workspace.
    pub fn new() -> Self {
        Workspace {
            current_user: None,
            repositories: Vec::new(),
            selected_repo: None,
            search_term: String::new(),
            editing: None,
        }
    }

    /// Look up a repository by id.
    pub fn repository(&self, repo_id: &str) -> Option<&Repository> {
        self.repositories.iter().find(|r| r.id == repo_id)
    }

    /// Look up a repository by id, mutably.
    pub fn repository_mut(&mut self, repo_id: &str) -> Option<&mut Repository> {
        self.repositories.iter_mut().find(|r| r.id == repo_id)
    }

    /// The currently selected repository, if any.
    pub fn selected_repository(&self) -> Option<&Repository> {
        self.selected_repo.as_deref().and_then(|id| self.repository(id))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Workspace::new()
    }
}

/// Generate a fresh unique identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(name: &str) -> User {
        User {
            id: new_id(),
            username: name.to_string(),
            email: format!("{name}@sandworm.com"),
            avatar: None,
        }
    }

    #[test]
    fn new_workspace_is_anonymous_and_empty() {
        let ws = Workspace::new();
        assert!(ws.current_user.is_none());
        assert!(ws.repositories.is_empty());
        assert!(ws.selected_repo.is_none());
        assert!(ws.editing.is_none());
        assert_eq!(ws.search_term, "");
    }

    #[test]
    fn repo_file_derives_path_and_size() {
        let file = RepoFile::new("notes.txt", "hello", make_user("ana"), Utc::now());
        assert_eq!(file.path, "/notes.txt");
        assert_eq!(file.size, 5);
        assert_eq!(file.content, "hello");
    }

    #[test]
    fn repo_file_size_is_byte_length() {
        // Multi-byte UTF-8 content counts bytes, not characters.
        let file = RepoFile::new("saludo.txt", "año", make_user("ana"), Utc::now());
        assert_eq!(file.size, 4);
    }

    #[test]
    fn new_ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }

    #[test]
    fn selected_repository_resolves_by_id() {
        let mut ws = Workspace::new();
        let now = Utc::now();
        let owner = make_user("ana");
        ws.repositories.push(Repository {
            id: "r1".to_string(),
            name: "demo".to_string(),
            description: String::new(),
            owner,
            collaborators: vec![],
            files: vec![],
            created_at: now,
            updated_at: now,
            is_private: false,
        });

        assert!(ws.selected_repository().is_none());
        ws.selected_repo = Some("r1".to_string());
        assert_eq!(ws.selected_repository().map(|r| r.name.as_str()), Some("demo"));
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let file = RepoFile::new("a.txt", "hi", make_user("ana"), Utc::now());
        let json = serde_json::to_value(&file).expect("serialize");
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("updatedBy").is_some());
        assert!(json.get("updated_at").is_none());
    }
}
