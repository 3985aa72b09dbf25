use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;

use crate::api::dto::user::User;

pub(crate) async fn root() -> impl IntoResponse {
    (StatusCode::OK, Json(User {
        name: "John".to_string(),
        email: "jon@labstack.com".to_string(),
    }))
}
