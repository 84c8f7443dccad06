use crate::modules::events::use_cases::record_event::handler::RecordEventHandler;
use crate::modules::events::use_cases::record_event::latency::LatencyPolicy;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<InMemoryEventStore<Value>>,
    pub record_handler: Arc<RecordEventHandler<InMemoryEventStore<Value>>>,
}

impl AppState {
    /// Wires a fresh, empty store into the handlers.
    pub fn new(latency: LatencyPolicy) -> Self {
        let event_store = Arc::new(InMemoryEventStore::new());
        let record_handler = Arc::new(RecordEventHandler::new(event_store.clone(), latency));
        Self {
            event_store,
            record_handler,
        }
    }
}
