//! Storage abstraction for student records. Handlers depend on the trait, never on a concrete engine.

mod sqlite;

pub use sqlite::SqliteStorage;

use crate::error::StorageError;
use crate::types::{NewStudent, Student};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Insert a validated record and return its assigned id.
    async fn create_student(&self, student: &NewStudent) -> Result<i64, StorageError>;

    /// `StorageError::NotFound` when no row has this id.
    async fn fetch_student_by_id(&self, id: i64) -> Result<Student, StorageError>;

    /// Every row, ordered by id. Empty when nothing has been created.
    async fn fetch_all_students(&self) -> Result<Vec<Student>, StorageError>;

    /// Cheap liveness probe used by the readiness route.
    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
