//! Student record shapes: the persisted row, the validated insert, and the raw request body.

use serde::{Deserialize, Serialize};

/// A persisted student. `id` is assigned by storage on insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Validated fields ready for insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Body of `POST /api/student` as sent by the client. Every field is optional here
/// so that missing values surface as validation errors rather than decode errors.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StudentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedId {
    pub id: i64,
}
