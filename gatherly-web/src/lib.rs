use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use gatherly_domain::{ServiceError, analytics::ArcAnalyticsPort, event::ArcEventService};
use log::info;
use tower_http::services::ServeDir;

mod event;
mod explore;
mod home;
pub mod pages;

#[derive(Clone)]
pub struct AppState {
    pub event_service: ArcEventService,
    pub analytics: ArcAnalyticsPort,
}

pub async fn run(
    event_service: ArcEventService,
    analytics: ArcAnalyticsPort,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) {
    let asset_dir =
        std::env::var("GATHERLY_ASSET_DIR").unwrap_or_else(|_| "gatherly-web/assets".to_string());

    let router = Router::new()
        .route("/", get(home::home))
        .route("/events/{slug}", get(event::get_event_details))
        .route("/explore", get(explore::explore))
        .nest_service("/icons", ServeDir::new(format!("{}/icons", asset_dir)))
        .with_state(AppState {
            event_service,
            analytics,
        });

    let port = std::env::var("GATHERLY_HTTP_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .expect("GATHERLY_HTTP_PORT must be a valid u16");

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .unwrap();

    info!("Web server listening on port {}", port);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .unwrap();

    info!("Web server shut down gracefully");
}

#[derive(Debug)]
pub struct PageError(ServiceError);

impl IntoResponse for PageError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        match self.0 {
            ServiceError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "message": msg })),
            )
                .into_response(),
            ServiceError::NotFound(msg) => {
                info!("{}", msg);
                (StatusCode::NOT_FOUND, pages::not_found_page()).into_response()
            }
            ServiceError::Upstream(msg) | ServiceError::Internal(msg) => {
                log::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, pages::server_error_page()).into_response()
            }
        }
    }
}

impl From<ServiceError> for PageError {
    fn from(value: ServiceError) -> Self {
        PageError(value)
    }
}
