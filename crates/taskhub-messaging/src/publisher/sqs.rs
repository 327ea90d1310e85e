//! SQS-backed publisher. Logs and continues on failure.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::Client;
use aws_sdk_sqs::config::{Credentials, Region};
use tracing::{info, warn};

use taskhub_core::config::messaging::MessagingConfig;
use taskhub_core::events::TaskEvent;

use super::TaskEventPublisher;

/// Publishes task events to an SQS queue.
pub struct SqsPublisher {
    client: Client,
    queue_url: String,
}

impl SqsPublisher {
    /// Build a client from configuration.
    ///
    /// When an endpoint override is set (LocalStack), static dummy
    /// credentials are used so no AWS profile is required.
    pub async fn new(config: &MessagingConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let Some(endpoint) = config.endpoint.as_deref().filter(|e| !e.trim().is_empty()) {
            loader = loader
                .endpoint_url(endpoint)
                .credentials_provider(Credentials::new("test", "test", None, None, "static"));
        }

        let sdk_config = loader.load().await;

        Self {
            client: Client::new(&sdk_config),
            queue_url: config.queue_url.clone(),
        }
    }
}

#[async_trait]
impl TaskEventPublisher for SqsPublisher {
    async fn publish(&self, event: TaskEvent) {
        let payload = match serde_json::to_string(&event) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(
                    event_type = ?event.event_type,
                    task_id = event.id,
                    error = %e,
                    "Failed to serialize task event"
                );
                return;
            }
        };

        match self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(payload)
            .send()
            .await
        {
            Ok(_) => {
                info!(
                    event_type = ?event.event_type,
                    task_id = event.id,
                    "Published task event to SQS"
                );
            }
            Err(e) => {
                warn!(
                    event_type = ?event.event_type,
                    task_id = event.id,
                    error = %e,
                    "Failed to publish task event to SQS"
                );
            }
        }
    }
}
