use gatherly_domain::{
    ServiceError, ServiceResult,
    event::{Event, EventRepository, SimilarEvent, SimilarEventsPort},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Adapter for the internal events API. Reads are sequential, unauthenticated
/// and carry no timeout or retry; a failure of any kind maps to
/// [`ServiceError::Upstream`].
#[derive(Clone)]
pub struct HttpEventsApi {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct EventEnvelope {
    event: Event,
}

#[derive(Deserialize)]
struct SimilarEventsEnvelope {
    events: Vec<SimilarEvent>,
}

impl HttpEventsApi {
    pub fn new<T>(base_url: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("GATHERLY_BASE_URL").expect("GATHERLY_BASE_URL must be set");
        Self::new(base_url)
    }

    async fn get_json<T>(&self, url: String) -> ServiceResult<T>
    where
        T: DeserializeOwned,
    {
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return ServiceError::upstream(format!("request to {} failed: {}", url, e)),
        };

        let status = response.status();
        if !status.is_success() {
            return ServiceError::upstream(format!("{} returned status {}", url, status));
        }

        match response.json::<T>().await {
            Ok(body) => Ok(body),
            Err(e) => ServiceError::upstream(format!("invalid JSON from {}: {}", url, e)),
        }
    }
}

#[async_trait::async_trait]
impl EventRepository for HttpEventsApi {
    async fn get_event_by_slug(&self, slug: &str) -> ServiceResult<Event> {
        let url = format!("{}/api/events/{}", self.base_url, slug);
        let envelope: EventEnvelope = self.get_json(url).await?;
        Ok(envelope.event)
    }
}

#[async_trait::async_trait]
impl SimilarEventsPort for HttpEventsApi {
    async fn get_similar_events_by_slug(&self, slug: &str) -> ServiceResult<Vec<SimilarEvent>> {
        let url = format!("{}/api/events/{}/similar", self.base_url, slug);
        let envelope: SimilarEventsEnvelope = self.get_json(url).await?;
        Ok(envelope.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_event_by_slug() {
        let mut server = mockito::Server::new_async().await;

        let body = serde_json::json!({
            "event": {
                "slug": "tech-summit",
                "title": "Tech Summit",
                "description": "The summit.",
                "image": "/images/tech-summit.png",
                "overview": "A summit about tech.",
                "date": "March 3, 2026",
                "time": "9:00 AM",
                "location": "Berlin",
                "mode": "In-person",
                "agenda": ["Keynote", "Workshops"],
                "audience": "Engineers",
                "organizer": "Gatherly",
                "tags": ["tech", "summit"]
            }
        });
        let mock = server
            .mock("GET", "/api/events/tech-summit")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let api = HttpEventsApi::new(server.url());
        let event = api.get_event_by_slug("tech-summit").await.unwrap();

        mock.assert_async().await;
        assert_eq!(event.title, "Tech Summit");
        assert_eq!(event.description.as_deref(), Some("The summit."));
        assert_eq!(event.agenda, vec!["Keynote", "Workshops"]);
        assert_eq!(event.tags, vec!["tech", "summit"]);
    }

    #[tokio::test]
    async fn test_partial_event_record_deserializes() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/events/half-baked")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"event": {"title": "Half Baked"}}"#)
            .create_async()
            .await;

        let api = HttpEventsApi::new(server.url());
        let event = api.get_event_by_slug("half-baked").await.unwrap();

        mock.assert_async().await;
        assert_eq!(event.title, "Half Baked");
        assert!(event.description.is_none());
        assert!(!event.has_description());
        assert!(event.agenda.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api/events/tech-summit")
            .with_status(502)
            .create_async()
            .await;

        let api = HttpEventsApi::new(server.url());
        assert!(matches!(
            api.get_event_by_slug("tech-summit").await,
            Err(ServiceError::Upstream(..))
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api/events/tech-summit")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let api = HttpEventsApi::new(server.url());
        assert!(matches!(
            api.get_event_by_slug("tech-summit").await,
            Err(ServiceError::Upstream(..))
        ));
    }

    #[tokio::test]
    async fn test_get_similar_events_by_slug() {
        let mut server = mockito::Server::new_async().await;

        let body = serde_json::json!({
            "events": [
                {"id": "ev-1", "slug": "ai-conf", "title": "AI Conf"},
                {"id": "ev-2", "slug": "rustfest", "title": "RustFest"}
            ]
        });
        let mock = server
            .mock("GET", "/api/events/tech-summit/similar")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let api = HttpEventsApi::new(server.url());
        let similar = api.get_similar_events_by_slug("tech-summit").await.unwrap();

        mock.assert_async().await;
        assert_eq!(similar.len(), 2);
        assert_eq!(similar[0].id, "ev-1");
        assert_eq!(similar[0].event.title, "AI Conf");
        assert_eq!(similar[1].id, "ev-2");
    }

    #[tokio::test]
    async fn test_empty_similar_events() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/api/events/tech-summit/similar")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"events": []}"#)
            .create_async()
            .await;

        let api = HttpEventsApi::new(server.url());
        let similar = api.get_similar_events_by_slug("tech-summit").await.unwrap();
        assert!(similar.is_empty());
    }
}
