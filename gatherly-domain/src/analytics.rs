use std::sync::{Arc, Mutex};

pub type ArcAnalyticsPort = Arc<Box<dyn AnalyticsPort + Send + Sync>>;

/// One named analytics event with a free-form property payload.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub properties: serde_json::Value,
}

impl AnalyticsEvent {
    pub fn new<T>(name: T, properties: serde_json::Value) -> Self
    where
        T: Into<String>,
    {
        Self {
            name: name.into(),
            properties,
        }
    }
}

/// Fire-and-forget analytics sink. Capture must not block the caller and
/// must never surface a failure to it.
pub trait AnalyticsPort {
    fn capture(&self, event: AnalyticsEvent);
}

#[derive(Default, Clone)]
pub struct MockAnalytics {
    pub captured: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

#[allow(unused)]
impl MockAnalytics {
    pub fn get_captured(&self) -> Vec<AnalyticsEvent> {
        self.captured.lock().unwrap().clone()
    }
}

impl AnalyticsPort for MockAnalytics {
    fn capture(&self, event: AnalyticsEvent) {
        self.captured.lock().unwrap().push(event);
    }
}
