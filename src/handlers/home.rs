use axum::Json;
use serde_json::{json, Value};

/// GET / - Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message")
    ),
    tag = "home"
)]
pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Journal API!"
    }))
}
