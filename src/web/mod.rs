use std::path::Path;

use axum::{
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::SharedDirectory;

pub mod routes;

use routes::activities;

/// Builds the full application: JSON API, root redirect and the static UI.
pub fn router(directory: SharedDirectory, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(activities::root_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())).layer(
                SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ),
            ),
        )
        .layer(CatchPanicLayer::new())
        .with_state(directory)
}
