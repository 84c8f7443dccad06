// In memory implementation of the EventStore port.
//
// Responsibilities
// - Keep every record for the lifetime of the process.
// - Allocate identifiers 0, 1, 2, ... under the same lock that guards the records,
//   so allocation and storage happen as one step.

use crate::shared::infrastructure::event_store::{EventStore, RecordId};
use std::collections::HashMap;
use tokio::sync::Mutex;

struct Records<Value> {
    by_id: HashMap<RecordId, Value>,
    next_id: RecordId,
}

pub struct InMemoryEventStore<Value: Clone + Send + Sync + 'static> {
    inner: Mutex<Records<Value>>,
}

impl<Value: Clone + Send + Sync + 'static> InMemoryEventStore<Value> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Records {
                by_id: HashMap::new(),
                next_id: 0,
            }),
        }
    }

    /// Number of records ever inserted, which is also the next identifier to hand out.
    pub async fn len(&self) -> u64 {
        self.inner.lock().await.next_id
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<Value: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Value> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<Value> EventStore<Value> for InMemoryEventStore<Value>
where
    Value: Clone + Send + Sync + 'static,
{
    async fn insert(&self, value: Value) -> RecordId {
        let mut guard = self.inner.lock().await;
        let id = guard.next_id;
        guard.by_id.insert(id, value);
        guard.next_id = id + 1;
        id
    }

    async fn get(&self, id: i64) -> Option<Value> {
        let id = RecordId::try_from(id).ok()?;
        self.inner.lock().await.by_id.get(&id).cloned()
    }
}
