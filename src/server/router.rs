//! HTTP routing and OpenAPI documentation.
//!
//! Routes are registered on `utoipa_axum` routers so the OpenAPI document is derived
//! from the same handler list that serves requests. Registration, login and the health
//! check are public. Everything else under `/api/v1` sits behind `require_auth`.

use axum::{middleware, response::Redirect, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::*, health::*, maintenance::*, motorcycle::*, prediction::*, user::*,
    },
    middleware::auth::require_auth,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mottu Fleet API",
        description = "Users, motorcycles and maintenance tickets for a rental fleet"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "User management"),
        (name = "motorcycle", description = "Motorcycle fleet"),
        (name = "maintenance", description = "Maintenance tickets"),
        (name = "ml", description = "Maintenance status prediction"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

/// Registers the `bearer` JWT security scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete application router.
///
/// # Arguments
/// - `state` - Shared application state, also used by the auth middleware
///
/// # Returns
/// - `Router` - Router with API routes, Swagger UI, tracing and CORS layers
pub fn router(state: AppState) -> Router {
    let (public_router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(health))
        .split_for_parts();

    let (protected_router, protected_api) = OpenApiRouter::<AppState>::new()
        .routes(routes!(get_users))
        .routes(routes!(update_user, delete_user))
        .routes(routes!(create_motorcycle, get_motorcycles))
        .routes(routes!(get_motorcycle, delete_motorcycle))
        .routes(routes!(create_maintenance, get_maintenances))
        .routes(routes!(get_maintenance, update_maintenance, delete_maintenance))
        .routes(routes!(predict_status))
        .split_for_parts();

    let mut api = api;
    api.merge(protected_api);

    let protected_router = protected_router.route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_auth,
    ));

    public_router
        .merge(protected_router)
        .route("/", get(|| async { Redirect::temporary("/swagger-ui") }))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
