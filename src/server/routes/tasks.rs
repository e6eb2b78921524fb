use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::server::data_models::Task;
use crate::server::state::ServerState;
use crate::server::ServerError;

pub async fn list_tasks(
    State(server_state): State<Arc<ServerState>>,
) -> Result<(StatusCode, Json<Vec<Task>>), ServerError> {
    let tasks = server_state.repository.list().await?;
    Ok((StatusCode::OK, Json(tasks)))
}

pub async fn create_task(
    State(server_state): State<Arc<ServerState>>,
    Json(task): Json<Task>,
) -> Result<(StatusCode, Json<Task>), ServerError> {
    let created = server_state.repository.save(task).await?;
    tracing::info!(id = created.id, "Created task");

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_task(
    State(server_state): State<Arc<ServerState>>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Task>), ServerError> {
    let task = server_state
        .repository
        .find_by_id(id)
        .await?
        .ok_or(ServerError::TaskNotFound)?;

    Ok((StatusCode::OK, Json(task)))
}

/// Overwrites description and status of an existing task. The path id is
/// authoritative; an id in the request body is ignored.
pub async fn update_task(
    State(server_state): State<Arc<ServerState>>,
    Path(id): Path<i64>,
    Json(payload): Json<Task>,
) -> Result<(StatusCode, Json<Task>), ServerError> {
    let mut task = server_state
        .repository
        .find_by_id(id)
        .await?
        .ok_or(ServerError::TaskNotFound)?;

    task.description = payload.description;
    task.status = payload.status;

    let updated = server_state.repository.save(task).await?;
    Ok((StatusCode::OK, Json(updated)))
}

pub async fn delete_task(
    State(server_state): State<Arc<ServerState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    server_state.repository.delete_by_id(id).await?;
    tracing::info!(id, "Deleted task");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};
    use tempfile::TempDir;

    use crate::store::TaskRepository;

    async fn test_state() -> Result<(TempDir, Arc<ServerState>)> {
        let dir = tempfile::tempdir()?;
        let repository = TaskRepository::connect(&dir.path().join("tasks.db"))
            .await
            .context("Failed to open test database")?;
        Ok((dir, Arc::new(ServerState::new(repository))))
    }

    #[tokio::test]
    async fn test_create_assigns_id() -> Result<()> {
        let (_dir, state) = test_state().await?;

        let (status, Json(created)) = create_task(
            State(state.clone()),
            Json(Task::new("write report", "pending")),
        )
        .await?;

        assert_eq!(status, StatusCode::CREATED);
        assert!(created.id.is_some());
        assert_eq!(created.description, "write report");
        assert_eq!(created.status, "pending");
        Ok(())
    }

    #[tokio::test]
    async fn test_list_returns_created_tasks() -> Result<()> {
        let (_dir, state) = test_state().await?;

        let mut created = Vec::new();
        for description in ["first", "second", "third"] {
            let (_, Json(task)) = create_task(
                State(state.clone()),
                Json(Task::new(description, "pending")),
            )
            .await?;
            created.push(task);
        }

        let (status, Json(tasks)) = list_tasks(State(state)).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(tasks.len(), 3);
        for task in &created {
            assert!(tasks.contains(task));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_task_fails() -> Result<()> {
        let (_dir, state) = test_state().await?;

        let result = get_task(State(state), Path(42)).await;
        assert!(matches!(result, Err(ServerError::TaskNotFound)));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_task_creates_nothing() -> Result<()> {
        let (_dir, state) = test_state().await?;

        let result = update_task(
            State(state.clone()),
            Path(42),
            Json(Task::new("ghost", "pending")),
        )
        .await;
        assert!(matches!(result, Err(ServerError::TaskNotFound)));

        let (_, Json(tasks)) = list_tasks(State(state)).await?;
        assert!(tasks.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_ignores_body_id() -> Result<()> {
        let (_dir, state) = test_state().await?;

        let (_, Json(first)) = create_task(
            State(state.clone()),
            Json(Task::new("first", "pending")),
        )
        .await?;
        let (_, Json(second)) = create_task(
            State(state.clone()),
            Json(Task::new("second", "pending")),
        )
        .await?;
        let first_id = first.id.context("missing id")?;

        let payload = Task {
            id: second.id,
            description: "first, revised".to_string(),
            status: "done".to_string(),
        };
        let (_, Json(updated)) = update_task(State(state.clone()), Path(first_id), Json(payload)).await?;

        assert_eq!(updated.id, Some(first_id));
        assert_eq!(updated.description, "first, revised");

        let (_, Json(untouched)) = get_task(State(state), Path(second.id.context("missing id")?)).await?;
        assert_eq!(untouched, second);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_task_is_silent() -> Result<()> {
        let (_dir, state) = test_state().await?;

        let status = delete_task(State(state), Path(42)).await?;
        assert_eq!(status, StatusCode::NO_CONTENT);
        Ok(())
    }

    #[tokio::test]
    async fn test_task_lifecycle() -> Result<()> {
        let (_dir, state) = test_state().await?;

        let (_, Json(created)) = create_task(
            State(state.clone()),
            Json(Task::new("buy milk", "pending")),
        )
        .await?;
        let id = created.id.context("created task should have an id")?;
        assert_eq!(created.description, "buy milk");
        assert_eq!(created.status, "pending");

        let (status, Json(updated)) = update_task(
            State(state.clone()),
            Path(id),
            Json(Task::new("buy milk", "done")),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.status, "done");

        let status = delete_task(State(state.clone()), Path(id)).await?;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let result = get_task(State(state), Path(id)).await;
        assert!(matches!(result, Err(ServerError::TaskNotFound)));
        Ok(())
    }
}
