// Port for the event store.
//
// Purpose
// - Hold opaque event payloads keyed by a sequential identifier.
//
// Boundaries
// - The store never inspects the payload. Parsing and validation happen in the inbound adapters.
// - Insertion cannot fail and a missing identifier is a normal lookup outcome, so the port has no error type.

use async_trait::async_trait;

pub type RecordId = u64;

#[async_trait]
pub trait EventStore<Value: Clone + Send + Sync + 'static>: Send + Sync {
    /// Stores `value` under the next free identifier and returns that identifier.
    async fn insert(&self, value: Value) -> RecordId;

    /// Looks up a record. Negative or never issued identifiers yield `None`.
    async fn get(&self, id: i64) -> Option<Value>;
}

pub mod in_memory;
