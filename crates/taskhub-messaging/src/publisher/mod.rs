//! Task event publisher trait and runtime wiring.

pub mod noop;
pub mod sqs;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use taskhub_core::config::messaging::MessagingConfig;
use taskhub_core::events::{TaskEvent, TaskEventKind};
use taskhub_entity::task::Task;

pub use noop::NoopPublisher;
pub use sqs::SqsPublisher;

/// Publishes task lifecycle events to an external queue.
#[async_trait]
pub trait TaskEventPublisher: Send + Sync {
    /// Deliver a single event. Implementations must swallow and log their
    /// own failures.
    async fn publish(&self, event: TaskEvent);

    /// Publish a creation event for `task`.
    async fn task_created(&self, task: &Task) {
        self.publish(event_for(TaskEventKind::TaskCreated, task)).await;
    }

    /// Publish a full-update event for `task`.
    async fn task_updated(&self, task: &Task) {
        self.publish(event_for(TaskEventKind::TaskUpdated, task)).await;
    }

    /// Publish a partial-update event for `task`.
    async fn task_patched(&self, task: &Task) {
        self.publish(event_for(TaskEventKind::TaskPatched, task)).await;
    }

    /// Publish a deletion event for `task`.
    async fn task_deleted(&self, task: &Task) {
        self.publish(event_for(TaskEventKind::TaskDeleted, task)).await;
    }
}

fn event_for(kind: TaskEventKind, task: &Task) -> TaskEvent {
    TaskEvent::new(
        kind,
        task.id,
        task.title.clone(),
        task.description.clone(),
        task.status.as_str(),
    )
}

/// Build the publisher selected by configuration.
///
/// Disabled messaging (the default) gets the no-op publisher. Enabled
/// messaging without a queue URL falls back to no-op with a warning
/// rather than failing startup.
pub async fn build_publisher(config: &MessagingConfig) -> Arc<dyn TaskEventPublisher> {
    if !config.enabled {
        return Arc::new(NoopPublisher);
    }

    if config.queue_url.trim().is_empty() {
        warn!("Messaging enabled but queue URL is empty; falling back to no-op publisher");
        return Arc::new(NoopPublisher);
    }

    Arc::new(SqsPublisher::new(config).await)
}
