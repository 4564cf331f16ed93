use axum::Json;
use undangan_services::templates::{self, Template};

pub async fn list() -> Json<&'static [Template]> {
    Json(templates::all())
}
