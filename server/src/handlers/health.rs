use axum::Json;
use response::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
