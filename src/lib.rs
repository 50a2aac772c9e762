//! Student API: create and read student records over HTTP, backed by SQLite.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod storage;
pub mod types;
pub mod validation;

pub use config::{Args, Config, HttpServer};
pub use error::{AppError, ConfigError, StorageError};
pub use response::{common_error, validation_error, write_json, ErrorResponse};
pub use routes::{app, common_routes, student_routes};
pub use server::{serve, shutdown_signal, SHUTDOWN_GRACE};
pub use state::AppState;
pub use storage::{SqliteStorage, Storage};
pub use types::{NewStudent, Student, StudentRequest};
