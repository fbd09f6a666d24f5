use crate::api::RequestContext;
use crate::models::health::HealthResponse;
use axum::Json;

pub async fn health(ctx: RequestContext) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(ctx.settings.service_name.as_str()))
}
