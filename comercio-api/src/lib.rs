use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod companies;
pub mod error;
pub mod mail;
pub mod products;
pub mod state;

pub use state::AppState;

/// Assembles the full router with the CORS and trace layers applied.
pub fn app(state: AppState, allowed_origins: &[String]) -> Router {
    // CORS Middleware
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .merge(companies::routes())
        .merge(products::routes())
        .merge(mail::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
