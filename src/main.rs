use std::sync::Arc;

use gatherly_analytics_posthog::{NoopAnalytics, PosthogAnalytics};
use gatherly_domain::{
    analytics::ArcAnalyticsPort,
    booking::{ArcBookingsPort, InMemoryBookings},
    event::{ArcEventRepository, ArcEventService, ArcSimilarEventsPort, EventServiceImpl},
};
use gatherly_events_http::HttpEventsApi;
use log::info;

mod logs;

// Display placeholder until a real bookings backend exists.
const DEFAULT_BOOKING_COUNT: u64 = 10;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    logs::init_logger();

    let events_api = HttpEventsApi::from_env();
    let event_repository: ArcEventRepository = Arc::new(Box::new(events_api.clone()));
    let similar_events: ArcSimilarEventsPort = Arc::new(Box::new(events_api));

    let bookings: ArcBookingsPort =
        Arc::new(Box::new(InMemoryBookings::new(DEFAULT_BOOKING_COUNT)));

    let analytics: ArcAnalyticsPort = match PosthogAnalytics::from_env() {
        Some(posthog) => Arc::new(Box::new(posthog)),
        None => {
            info!("PostHog credentials not configured, analytics capture disabled");
            Arc::new(Box::new(NoopAnalytics))
        }
    };

    let event_service: ArcEventService = Arc::new(Box::new(EventServiceImpl::new(
        event_repository,
        similar_events,
        bookings,
    )));

    info!("Starting application");

    gatherly_web::run(event_service, analytics, shutdown_signal()).await;
}
