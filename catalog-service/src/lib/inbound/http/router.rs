use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_book::create_book;
use super::handlers::delete_all_books::delete_all_books;
use super::handlers::delete_book::delete_book;
use super::handlers::get_book::get_book;
use super::handlers::list_books::list_books;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_book::update_book;
use super::middleware::authenticate as auth_middleware;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub authenticator: Arc<Authenticator>,
}

async fn welcome() -> &'static str {
    "Welcome to our library"
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    book_service: Arc<dyn BookServicePort>,
    authenticator: Arc<Authenticator>,
    allowed_origin: HeaderValue,
) -> Router {
    let state = AppState {
        user_service,
        book_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login));

    // Every book route sits behind the authentication gate
    let protected_routes = Router::new()
        .route(
            "/books",
            get(list_books).post(create_book).delete(delete_all_books),
        )
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Single browser origin, mirroring the client the API is built for
    let cors_layer = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer)
        .with_state(state)
}
