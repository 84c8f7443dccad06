use crate::modules::events::use_cases::record_event::latency::LatencyPolicy;
use crate::shared::infrastructure::event_store::{EventStore, RecordId};
use serde_json::Value;
use std::sync::Arc;

pub struct RecordEventHandler<TEventStore>
where
    TEventStore: EventStore<Value> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    latency: LatencyPolicy,
}

impl<TEventStore> RecordEventHandler<TEventStore>
where
    TEventStore: EventStore<Value> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>, latency: LatencyPolicy) -> Self {
        Self {
            event_store,
            latency,
        }
    }

    /// Stores the payload and returns its id once any configured latency has elapsed.
    /// The event is readable as soon as it is stored, before the delay runs out.
    pub async fn handle(&self, payload: Value) -> RecordId {
        let id = self.event_store.insert(payload).await;
        tracing::debug!(id, "event recorded");

        if let Some(delay) = self.latency.delay_for(id) {
            tracing::debug!(id, delay_ms = delay.as_millis() as u64, "holding response");
            tokio::time::sleep(delay).await;
        }
        id
    }
}
