//! # `taskd`
//!
//! A minimal task-tracking REST service: a single `Task` entity (free-form
//! description and status) persisted in SQLite and exposed through five CRUD
//! endpoints.
//!
//! ## Running the server
//!
//! ```sh
//! cargo run --bin server -- --port 3000 --db-path tasks.db
//! ```
//!
//! ## Endpoints
//!
//! | Verb/path           | Behavior                                 |
//! |---------------------|------------------------------------------|
//! | `GET /tasks`        | list all tasks                           |
//! | `POST /tasks`       | create a task, returns the assigned id   |
//! | `GET /tasks/:id`    | fetch one task (404 when absent)         |
//! | `PUT /tasks/:id`    | overwrite description and status         |
//! | `DELETE /tasks/:id` | remove a task                            |
//! | `GET /health`       | liveness check                           |

pub mod server;
pub mod store;
