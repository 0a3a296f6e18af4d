use std::sync::Arc;

use dashmap::DashMap;

use crate::ServiceResult;

pub type ArcBookingsPort = Arc<Box<dyn BookingsPort + Send + Sync>>;

/// Display-only booking counts for the signup card. The booking submission
/// itself is handled by an external widget, not by this service.
#[async_trait::async_trait]
pub trait BookingsPort {
    async fn get_booking_count(&self, slug: &str) -> ServiceResult<u64>;
}

/// In-memory booking counts, falling back to a fixed default for events
/// without a recorded count.
pub struct InMemoryBookings {
    counts: DashMap<String, u64>,
    default_count: u64,
}

impl InMemoryBookings {
    pub fn new(default_count: u64) -> Self {
        Self {
            counts: DashMap::new(),
            default_count,
        }
    }

    pub fn set_count(&self, slug: &str, count: u64) {
        self.counts.insert(slug.to_string(), count);
    }
}

#[async_trait::async_trait]
impl BookingsPort for InMemoryBookings {
    async fn get_booking_count(&self, slug: &str) -> ServiceResult<u64> {
        Ok(self
            .counts
            .get(slug)
            .map(|count| *count)
            .unwrap_or(self.default_count))
    }
}

#[derive(Default, Clone)]
pub struct MockBookings(pub u64);

#[async_trait::async_trait]
impl BookingsPort for MockBookings {
    async fn get_booking_count(&self, _slug: &str) -> ServiceResult<u64> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_count_for_unknown_slug() {
        let bookings = InMemoryBookings::new(10);
        assert_eq!(bookings.get_booking_count("tech-summit").await.unwrap(), 10);
    }

    #[tokio::test]
    async fn test_recorded_count_overrides_default() {
        let bookings = InMemoryBookings::new(10);
        bookings.set_count("tech-summit", 0);
        assert_eq!(bookings.get_booking_count("tech-summit").await.unwrap(), 0);
        assert_eq!(bookings.get_booking_count("other").await.unwrap(), 10);
    }
}
