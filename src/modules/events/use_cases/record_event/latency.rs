use crate::shared::infrastructure::event_store::RecordId;
use std::time::Duration;

/// Artificial delay applied to a write response after the event has been stored.
///
/// `ByIdentifier` reproduces the legacy load-testing behaviour: ids ending in 2, 5 or 8
/// hold the response for that many seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LatencyPolicy {
    #[default]
    Disabled,
    ByIdentifier,
}

impl LatencyPolicy {
    pub fn delay_for(self, id: RecordId) -> Option<Duration> {
        match self {
            LatencyPolicy::Disabled => None,
            LatencyPolicy::ByIdentifier => match id % 10 {
                rem @ (2 | 5 | 8) => Some(Duration::from_secs(rem)),
                _ => None,
            },
        }
    }
}
