//! JSON over HTTP front end for [`EmailValidator`].
//!
//! | Route            | Method    | Response                                  |
//! |------------------|-----------|-------------------------------------------|
//! | `/`, `/health`   | any       | `{"status":"ok"}`                         |
//! | `/validate`      | GET       | `?email=` → result projection             |
//! | `/validate`      | POST      | JSON `{email}` or form `email=` → result  |
//! | `/validate`      | other     | 405                                       |
//! | any path         | OPTIONS   | 204, CORS preflight answered by the layer |
//! | anything else    |           | 404                                       |

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{FromRequest, Query, Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::validator::EmailValidator;

const MISSING_EMAIL: &str = "Missing or invalid \"email\"";

#[derive(Debug, Deserialize)]
struct EmailParams {
    email: Option<String>,
}

pub fn router(validator: Arc<EmailValidator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", any(health))
        .route("/health", any(health))
        .route(
            "/validate",
            get(validate_query)
                .post(validate_body)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(validator)
        .layer(middleware::from_fn(options_no_content))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(cors)
}

async fn options_no_content(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    next.run(req).await
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn validate_query(
    State(validator): State<Arc<EmailValidator>>,
    params: Option<Query<EmailParams>>,
) -> Response {
    let email = params.and_then(|Query(p)| p.email);
    respond(validator, email).await
}

async fn validate_body(State(validator): State<Arc<EmailValidator>>, req: Request) -> Response {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let params = if content_type.contains("application/json") {
        Json::<EmailParams>::from_request(req, &())
            .await
            .ok()
            .map(|Json(p)| p)
    } else if content_type.contains("application/x-www-form-urlencoded") {
        Form::<EmailParams>::from_request(req, &())
            .await
            .ok()
            .map(|Form(p)| p)
    } else {
        None
    };

    respond(validator, params.and_then(|p| p.email)).await
}

async fn respond(validator: Arc<EmailValidator>, email: Option<String>) -> Response {
    let Some(email) = email.filter(|e| !e.is_empty()) else {
        return error(StatusCode::BAD_REQUEST, MISSING_EMAIL);
    };

    // DNS lookups block
    match tokio::task::spawn_blocking(move || validator.validate(&email)).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            trace_warn!("validation task failed: {err}");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}

async fn method_not_allowed() -> Response {
    error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not found")
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
