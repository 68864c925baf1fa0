use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use indexmap::IndexMap;

use crate::database::SharedDirectory;
use crate::error::DirectoryError;
use crate::models::{Activity, ActivityName};
use crate::services::activities_service::{self, MessageView, ParticipantQuery};

pub const INDEX_PATH: &str = "/static/index.html";

pub async fn root_handler() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub async fn activities_handler(
    State(directory): State<SharedDirectory>,
) -> Json<IndexMap<ActivityName, Activity>> {
    Json(activities_service::list_activities(&directory).await)
}

// `Path` has already percent-decoded the name ("Chess%20Club" -> "Chess Club").
pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<MessageView>, DirectoryError> {
    activities_service::signup(&directory, &activity_name, &query.email)
        .await
        .map(Json)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<MessageView>, DirectoryError> {
    activities_service::unregister(&directory, &activity_name, &query.email)
        .await
        .map(Json)
}
