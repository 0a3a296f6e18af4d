use gatherly_domain::{
    ServiceError, ServiceResult,
    analytics::{AnalyticsEvent, AnalyticsPort},
};

const DISTINCT_ID: &str = "gatherly-server";

/// PostHog capture adapter. Events are sent on a spawned task; failures are
/// logged and swallowed, never surfaced to the page flow.
#[derive(Clone)]
pub struct PosthogAnalytics {
    client: reqwest::Client,
    host: String,
    api_key: String,
}

impl PosthogAnalytics {
    pub fn new<T, U>(host: T, api_key: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            client: reqwest::Client::new(),
            host: host.into(),
            api_key: api_key.into(),
        }
    }

    /// Returns `None` when the PostHog credentials are not configured.
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("GATHERLY_POSTHOG_HOST").ok()?;
        let api_key = std::env::var("GATHERLY_POSTHOG_API_KEY").ok()?;
        Some(Self::new(host, api_key))
    }

    fn capture_payload(&self, event: &AnalyticsEvent) -> serde_json::Value {
        serde_json::json!({
            "api_key": self.api_key,
            "event": event.name,
            "properties": event.properties,
            "distinct_id": DISTINCT_ID,
        })
    }

    pub async fn send(&self, event: &AnalyticsEvent) -> ServiceResult<()> {
        let url = format!("{}/capture/", self.host);
        let response = match self
            .client
            .post(&url)
            .json(&self.capture_payload(event))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return ServiceError::upstream(format!("capture request failed: {}", e)),
        };

        let status = response.status();
        if !status.is_success() {
            return ServiceError::upstream(format!("{} returned status {}", url, status));
        }
        Ok(())
    }
}

impl AnalyticsPort for PosthogAnalytics {
    fn capture(&self, event: AnalyticsEvent) {
        let adapter = self.clone();
        tokio::spawn(async move {
            if let Err(e) = adapter.send(&event).await {
                log::warn!("Failed to capture analytics event '{}': {}", event.name, e);
            }
        });
    }
}

/// Used when no PostHog credentials are configured.
pub struct NoopAnalytics;

impl AnalyticsPort for NoopAnalytics {
    fn capture(&self, _event: AnalyticsEvent) {}
}
