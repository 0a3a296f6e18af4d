use std::sync::Arc;

use serde::Deserialize;

use crate::{ServiceResult, booking::ArcBookingsPort, util::validate_slug};

pub type ArcEventRepository = Arc<Box<dyn EventRepository + Send + Sync>>;

/// Read access to the internal events API.
#[async_trait::async_trait]
pub trait EventRepository {
    async fn get_event_by_slug(&self, slug: &str) -> ServiceResult<Event>;
}

pub type ArcSimilarEventsPort = Arc<Box<dyn SimilarEventsPort + Send + Sync>>;

/// Externally computed similarity lookup. The query logic lives upstream;
/// this side only transports the result.
#[async_trait::async_trait]
pub trait SimilarEventsPort {
    async fn get_similar_events_by_slug(&self, slug: &str) -> ServiceResult<Vec<SimilarEvent>>;
}

/// A single event record as served by the internal API. All display fields
/// are opaque strings passed through to rendering; records can be partial,
/// so every field falls back to its default when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub agenda: Vec<String>,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Event {
    /// An event without a description is treated as not found, no matter
    /// what its other fields contain.
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Same shape as [`Event`], identified by `id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimilarEvent {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub event: Event,
}

/// Everything the details page needs for one render.
#[derive(Debug, Clone)]
pub struct EventDetails {
    pub event: Event,
    pub bookings: u64,
    pub similar_events: Vec<SimilarEvent>,
}

pub type ArcEventService = Arc<Box<dyn EventService + Send + Sync>>;

#[async_trait::async_trait]
pub trait EventService {
    async fn get_event_details(&self, slug: &str) -> ServiceResult<EventDetails>;
}

pub struct EventServiceImpl {
    event_repository: ArcEventRepository,
    similar_events: ArcSimilarEventsPort,
    bookings: ArcBookingsPort,
}

impl EventServiceImpl {
    pub fn new(
        event_repository: ArcEventRepository,
        similar_events: ArcSimilarEventsPort,
        bookings: ArcBookingsPort,
    ) -> Self {
        Self {
            event_repository,
            similar_events,
            bookings,
        }
    }
}

#[async_trait::async_trait]
impl EventService for EventServiceImpl {
    async fn get_event_details(&self, slug: &str) -> ServiceResult<EventDetails> {
        let slug = validate_slug(slug)?;

        let event = self.event_repository.get_event_by_slug(&slug).await?;
        if !event.has_description() {
            return crate::ServiceError::not_found(format!("No event found for slug '{}'", slug));
        }

        let bookings = self.bookings.get_booking_count(&slug).await?;
        let similar_events = self.similar_events.get_similar_events_by_slug(&slug).await?;

        Ok(EventDetails {
            event,
            bookings,
            similar_events,
        })
    }
}

#[derive(Default, Clone)]
pub struct MockEventRepository {
    pub events: Arc<std::sync::Mutex<Vec<Event>>>,
    pub requested_slugs: Arc<std::sync::Mutex<Vec<String>>>,
}

#[allow(unused)]
impl MockEventRepository {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(std::sync::Mutex::new(events)),
            requested_slugs: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn get_requested_slugs(&self) -> Vec<String> {
        self.requested_slugs.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EventRepository for MockEventRepository {
    async fn get_event_by_slug(&self, slug: &str) -> ServiceResult<Event> {
        self.requested_slugs.lock().unwrap().push(slug.to_string());
        let events = self.events.lock().unwrap();
        match events.iter().find(|e| e.slug == slug) {
            Some(event) => Ok(event.clone()),
            None => crate::ServiceError::upstream(format!("no event record for '{}'", slug)),
        }
    }
}

#[derive(Default, Clone)]
pub struct MockSimilarEvents {
    pub events: Arc<std::sync::Mutex<Vec<SimilarEvent>>>,
    pub requested_slugs: Arc<std::sync::Mutex<Vec<String>>>,
}

#[allow(unused)]
impl MockSimilarEvents {
    pub fn with_events(events: Vec<SimilarEvent>) -> Self {
        Self {
            events: Arc::new(std::sync::Mutex::new(events)),
            requested_slugs: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn get_requested_slugs(&self) -> Vec<String> {
        self.requested_slugs.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SimilarEventsPort for MockSimilarEvents {
    async fn get_similar_events_by_slug(&self, slug: &str) -> ServiceResult<Vec<SimilarEvent>> {
        self.requested_slugs.lock().unwrap().push(slug.to_string());
        Ok(self.events.lock().unwrap().clone())
    }
}
