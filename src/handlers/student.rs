//! Student handlers: create, fetch by id, fetch all. Each is bound to the injected storage through `AppState`.

use crate::error::AppError;
use crate::response::write_json;
use crate::state::AppState;
use crate::types::{CreatedId, StudentRequest};
use crate::validation::validate_student;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse::<i64>()
        .map_err(|e| AppError::BadRequest(format!("invalid id {:?}: {}", id_str, e)))
}

/// Decode the first JSON value in `body`. Trailing bytes after it are ignored and a
/// top-level `null` decodes to an all-missing request, so validation reports every field.
fn decode_body(body: &[u8]) -> Result<StudentRequest, AppError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<StudentRequest>>();
    match values.next() {
        None => Err(AppError::BadRequest("body is empty".into())),
        Some(Ok(req)) => Ok(req.unwrap_or_default()),
        Some(Err(e)) => Err(AppError::BadRequest(format!("unable to decode request body: {}", e))),
    }
}

/// `POST /api/student`
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("creating student");
    let body = body.map_err(|e| {
        AppError::BadRequest(format!("unable to read request body: {}", e.body_text()))
    })?;
    let req = decode_body(&body)?;
    let student = validate_student(&req).map_err(AppError::Validation)?;
    let id = state.storage.create_student(&student).await?;
    tracing::info!(id, "student created");
    Ok(write_json(StatusCode::CREATED, CreatedId { id }))
}

/// `GET /api/student/:id`
pub async fn fetch_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id = %id_str, "fetching student by id");
    let id = parse_id(&id_str)?;
    let student = state.storage.fetch_student_by_id(id).await?;
    Ok(write_json(StatusCode::OK, student))
}

/// `GET /api/students`
pub async fn fetch_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("fetching all students");
    let students = state.storage.fetch_all_students().await?;
    Ok(write_json(StatusCode::OK, students))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_non_integers() {
        assert_eq!(parse_id("12").unwrap(), 12);
        let err = parse_id("abc").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("invalid id \"abc\""));
    }

    #[test]
    fn decode_body_distinguishes_empty_from_malformed() {
        assert_eq!(decode_body(b"").unwrap_err().to_string(), "body is empty");
        assert_eq!(decode_body(b" \n").unwrap_err().to_string(), "body is empty");
        let err = decode_body(b"{not json").unwrap_err().to_string();
        assert!(err.starts_with("unable to decode request body: "));
        let err = decode_body(br#"{"age": "old"}"#).unwrap_err().to_string();
        assert!(err.starts_with("unable to decode request body: "));
    }

    #[test]
    fn decode_body_reads_only_the_first_value() {
        let req = decode_body(b"null").unwrap();
        assert!(req.name.is_none() && req.email.is_none() && req.age.is_none());

        let req = decode_body(br#"{"name":"Ann","age":30} trailing"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Ann"));
        assert_eq!(req.age, Some(30));
    }
}
