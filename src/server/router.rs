use anyhow::Result;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::routing::get;
use axum::Router;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

use crate::server::routes::{default, tasks};
use crate::server::state::ServerState;
use crate::store::TaskRepository;

#[derive(Debug, Args)]
pub struct RouterArgs {
    /// Path to the SQLite database file. Created if it does not exist.
    #[clap(short, long, default_value = "tasks.db")]
    pub db_path: PathBuf,
}

pub async fn init_router(args: &RouterArgs) -> Result<Router> {
    let repository = TaskRepository::connect(&args.db_path).await?;
    let state = Arc::new(ServerState::new(repository));

    let router = Router::new()
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/:id",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/health", get(default::health_check))
        .with_state(state)
        .layer((
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                // Log the matched route's path (with placeholders not filled in).
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);
                tracing::debug!("{}", request.uri());

                info_span!(
                    "http_request",
                    method = ?request.method(),
                    matched_path,
                )
            }),
            TimeoutLayer::new(Duration::from_secs(15)),
        ));
    Ok(router)
}
