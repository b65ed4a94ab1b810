//! Read/derive layer over the workspace: dashboard projections and search.
//!
//! Nothing here mutates state; every function is a pure projection of a
//! repository snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::workspace::state::{RepoFile, Repository};

/// A dashboard card summarizing one repository.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_private: bool,
    pub file_count: usize,
    pub collaborator_count: usize,
    pub updated_at: DateTime<Utc>,
}

/// A file-list row for the repository detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

/// Project a repository into its dashboard card.
pub fn repository_card(repo: &Repository) -> RepositoryCard {
    RepositoryCard {
        id: repo.id.clone(),
        name: repo.name.clone(),
        description: repo.description.clone(),
        is_private: repo.is_private,
        file_count: repo.files.len(),
        collaborator_count: repo.collaborators.len(),
        updated_at: repo.updated_at,
    }
}

/// Project a file into its list row.
pub fn file_summary(file: &RepoFile) -> FileSummary {
    FileSummary {
        id: file.id.clone(),
        name: file.name.clone(),
        size: file.size,
        updated_by: file.updated_by.username.clone(),
        updated_at: file.updated_at,
    }
}

/// Repositories whose name or description contains the search term,
/// case-insensitively. An empty term matches everything.
pub fn filter_repositories<'a>(
    repositories: &'a [Repository],
    search_term: &str,
) -> Vec<&'a Repository> {
    let term = search_term.to_lowercase();
    repositories
        .iter()
        .filter(|repo| {
            repo.name.to_lowercase().contains(&term)
                || repo.description.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::seed::demo_workspace;

    #[test]
    fn card_counts_files_and_collaborators() {
        let ws = demo_workspace();
        let card = repository_card(&ws.repositories[0]);
        assert_eq!(card.name, "proyecto-principal");
        assert_eq!(card.file_count, 2);
        assert_eq!(card.collaborator_count, 2);
        assert!(!card.is_private);
    }

    #[test]
    fn file_summary_carries_author_username() {
        let ws = demo_workspace();
        let summary = file_summary(&ws.repositories[0].files[1]);
        assert_eq!(summary.name, "config.json");
        assert_eq!(summary.updated_by, "maria_dev");
    }

    #[test]
    fn empty_term_matches_all() {
        let ws = demo_workspace();
        let matches = filter_repositories(&ws.repositories, "");
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn filter_is_case_insensitive() {
        // "proyecto" appears in the first repository's name and the second
        // repository's description.
        let ws = demo_workspace();
        let matches = filter_repositories(&ws.repositories, "PROYECTO");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "proyecto-principal");
        assert_eq!(matches[1].name, "documentacion");
    }

    #[test]
    fn filter_matches_description_too() {
        let ws = demo_workspace();
        let matches = filter_repositories(&ws.repositories, "node.js");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "backend-api");
    }

    #[test]
    fn filter_with_no_hits_is_empty() {
        let ws = demo_workspace();
        let matches = filter_repositories(&ws.repositories, "nonexistent");
        assert!(matches.is_empty());
    }

    #[test]
    fn filter_preserves_workspace_order() {
        let ws = demo_workspace();
        let matches = filter_repositories(&ws.repositories, "proyecto");
        let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["proyecto-principal", "documentacion"]);
    }
}
