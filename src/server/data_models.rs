use serde::{Deserialize, Serialize};

/// The single persisted entity: a task with a free-form description and a
/// free-form status. No set of allowed status values is enforced.
///
/// `id` is assigned by the storage layer on first save and never supplied by
/// callers; `None` marks a task that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    #[serde(default)]
    pub id: Option<i64>,
    pub description: String,
    pub status: String,
}

impl Task {
    pub fn new(description: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
            status: status.into(),
        }
    }
}
