//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{events, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventmap API",
        version = "0.1.0",
        description = "Geo-tagged event discovery REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        health::health_check,
        events::list_events,
        events::get_event,
        events::create_event,
    ),
    components(
        schemas(
            // Events
            crate::models::event::Event,
            crate::models::event::EventWithDistance,
            crate::models::event::Location,
            crate::models::event::CreateEvent,
            events::EventsListResponse,
            events::EventResponse,
            events::CreatedEventResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::ErrorBody,
            crate::error::ErrorCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Event creation and discovery")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
