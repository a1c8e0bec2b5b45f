use std::time::Duration;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};
use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Html,
    routing::{get, post},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::auth::Claims;
use crate::error::AppError;
use crate::gql::AppSchema;
use crate::middleware::jwt_middleware;
use crate::state::AppState;

/// Build the Axum router with health endpoint and GraphQL.
pub fn build_router(state: AppState, schema: AppSchema) -> Router {
    let gql_ws = GraphQLSubscription::new(schema.clone());

    Router::new()
        // Liveness check; also proves DB connectivity.
        .route("/health", get(health))
        // graphql post & subscription
        .route("/graphql", post(graphql_handler).get_service(gql_ws))
        .route("/graphiql", get(graphiql))
        .layer(Extension(schema))
        .layer(middleware::from_fn_with_state(state.clone(), jwt_middleware))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(CorsLayer::permissive())
}

/// Execute a GraphQL request, forwarding verified claims into its context.
async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    claims: Option<Extension<Claims>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(Extension(claims)) = claims {
        request = request.data(claims);
    }
    schema.execute(request).await.into()
}

async fn graphiql() -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint("/graphql")
            .subscription_endpoint("/graphql")
            .finish(),
    )
}

/// Liveness + quick DB probe.
async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    infra::db::ping(&state.db).await?;
    Ok("ok")
}
