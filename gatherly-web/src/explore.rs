use axum::{extract::State, response::Redirect};
use gatherly_domain::analytics::AnalyticsEvent;

use crate::AppState;

/// The explore control emits one analytics event per activation, then sends
/// the visitor to the events anchor on the home page. Capture is not
/// awaited; a failing sink never delays the redirect.
pub async fn explore(State(state): State<AppState>) -> Redirect {
    state.analytics.capture(AnalyticsEvent::new(
        "my event",
        serde_json::json!({"property": "value"}),
    ));
    Redirect::to("/#events")
}
