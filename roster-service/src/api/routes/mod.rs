use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::api::presentation::{GenerateResponse, GeneratedShiftSerialize};
use crate::api::requests::GenerateRequest;
use crate::api::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster Service API",
        version = "1.0.0",
        description = "Monthly staff shift roster generation API"
    ),
    paths(crate::api::handlers::generate_schedule,),
    components(schemas(GenerateRequest, GenerateResponse, GeneratedShiftSerialize))
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new().route("/schedule-jobs", post(handlers::generate_schedule));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
