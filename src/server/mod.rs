mod router;
mod state;
pub mod data_models;
pub mod routes;
pub mod utils;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub use router::{init_router, RouterArgs};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Internal server error: `{0}`")]
    InternalError(#[from] anyhow::Error),

    #[error("Task not found")]
    TaskNotFound,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::InternalError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
            ServerError::TaskNotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
