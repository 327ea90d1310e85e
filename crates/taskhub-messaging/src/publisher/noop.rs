//! Default publisher that does nothing. Wired when messaging is disabled.

use async_trait::async_trait;
use tracing::debug;

use taskhub_core::events::TaskEvent;

use super::TaskEventPublisher;

/// Publisher that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublisher;

#[async_trait]
impl TaskEventPublisher for NoopPublisher {
    async fn publish(&self, event: TaskEvent) {
        debug!(event_type = ?event.event_type, task_id = event.id, "Noop publisher - event dropped");
    }
}
