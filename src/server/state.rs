use crate::store::TaskRepository;

/// Represents the state of the server.
#[derive(Clone)]
pub struct ServerState {
    pub repository: TaskRepository,
}

impl ServerState {
    pub fn new(repository: TaskRepository) -> Self {
        Self { repository }
    }
}
