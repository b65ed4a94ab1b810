//! Demo-mode seed data: the repositories a fresh session starts with.

use chrono::{DateTime, Utc};

use super::state::{RepoFile, Repository, User, Workspace};

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn demo_user() -> User {
    User {
        id: "1".to_string(),
        username: "demo_user".to_string(),
        email: "demo@sandworm.com".to_string(),
        avatar: None,
    }
}

fn maria() -> User {
    User {
        id: "2".to_string(),
        username: "maria_dev".to_string(),
        email: "maria@sandworm.com".to_string(),
        avatar: None,
    }
}

fn carlos() -> User {
    User {
        id: "3".to_string(),
        username: "carlos_design".to_string(),
        email: "carlos@sandworm.com".to_string(),
        avatar: None,
    }
}

/// Build the demo workspace: three seed repositories, anonymous session.
///
/// Ownership of the seed data is reassigned to whoever logs in, per the
/// login contract.
pub fn demo_workspace() -> Workspace {
    let mut ws = Workspace::new();
    ws.repositories = vec![
        Repository {
            id: "1".to_string(),
            name: "proyecto-principal".to_string(),
            description: "Aplicación web principal del equipo".to_string(),
            owner: demo_user(),
            collaborators: vec![maria(), carlos()],
            files: vec![
                RepoFile {
                    id: "1".to_string(),
                    name: "README.md".to_string(),
                    path: "/README.md".to_string(),
                    content: "# Proyecto Principal\n\nBienvenido al proyecto principal de nuestro equipo.".to_string(),
                    size: 67,
                    updated_at: ts("2025-12-10T10:00:00Z"),
                    updated_by: demo_user(),
                },
                RepoFile {
                    id: "2".to_string(),
                    name: "config.json".to_string(),
                    path: "/config.json".to_string(),
                    content: "{\n  \"version\": \"1.0.0\",\n  \"name\": \"proyecto-principal\"\n}".to_string(),
                    size: 52,
                    updated_at: ts("2025-12-12T14:30:00Z"),
                    updated_by: maria(),
                },
            ],
            created_at: ts("2025-11-01T08:00:00Z"),
            updated_at: ts("2025-12-12T14:30:00Z"),
            is_private: false,
        },
        Repository {
            id: "2".to_string(),
            name: "documentacion".to_string(),
            description: "Documentación técnica y guías del proyecto".to_string(),
            owner: demo_user(),
            collaborators: vec![carlos()],
            files: vec![RepoFile {
                id: "3".to_string(),
                name: "guia-inicio.md".to_string(),
                path: "/guia-inicio.md".to_string(),
                content: "# Guía de Inicio\n\n## Instalación\n\n1. Clona el repositorio\n2. Instala dependencias\n3. Ejecuta el proyecto".to_string(),
                size: 123,
                updated_at: ts("2025-12-08T16:00:00Z"),
                updated_by: carlos(),
            }],
            created_at: ts("2025-11-15T09:00:00Z"),
            updated_at: ts("2025-12-08T16:00:00Z"),
            is_private: true,
        },
        Repository {
            id: "3".to_string(),
            name: "backend-api".to_string(),
            description: "API REST del backend en Node.js".to_string(),
            owner: demo_user(),
            collaborators: vec![maria()],
            files: vec![],
            created_at: ts("2025-12-01T10:00:00Z"),
            updated_at: ts("2025-12-01T10:00:00Z"),
            is_private: false,
        },
    ];
    ws
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::invariants::validate_invariants;

    #[test]
    fn seed_has_three_repositories() {
        let ws = demo_workspace();
        assert_eq!(ws.repositories.len(), 3);
        assert_eq!(ws.repositories[0].name, "proyecto-principal");
        assert_eq!(ws.repositories[1].name, "documentacion");
        assert_eq!(ws.repositories[2].name, "backend-api");
    }

    #[test]
    fn seed_starts_anonymous_with_no_selection() {
        let ws = demo_workspace();
        assert!(ws.current_user.is_none());
        assert!(ws.selected_repo.is_none());
    }

    #[test]
    fn seed_satisfies_invariants() {
        let ws = demo_workspace();
        assert!(validate_invariants(&ws).is_ok());
    }

    #[test]
    fn seed_files_and_collaborators_are_populated() {
        let ws = demo_workspace();
        assert_eq!(ws.repositories[0].files.len(), 2);
        assert_eq!(ws.repositories[0].collaborators.len(), 2);
        assert_eq!(ws.repositories[1].files.len(), 1);
        assert!(ws.repositories[2].files.is_empty());
        assert!(ws.repositories[1].is_private);
    }
}
