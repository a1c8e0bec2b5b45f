use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Extract and verify a bearer token, adding its claims to the request
/// extensions for the GraphQL handler.
///
/// Invalid or missing tokens do not fail the request; the resolvers decide
/// what an anonymous caller may do.
pub async fn jwt_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned);

    if let Some(token) = token {
        match state.jwt_service().verify_token(&token) {
            Ok(claims) => {
                request.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!("ignoring bearer token: {}", e);
            }
        }
    }

    next.run(request).await
}
