use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Rejections from the activity directory. A rejected call never mutates
/// the directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl DirectoryError {
    pub fn status(&self) -> StatusCode {
        match self {
            DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
            DirectoryError::AlreadySignedUp | DirectoryError::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
