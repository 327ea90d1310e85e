//! Outbound event publishing configuration.

use serde::{Deserialize, Serialize};

/// SQS event publishing configuration.
///
/// Publishing is disabled by default; when disabled the no-op publisher
/// is wired instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Enable publishing task events to SQS.
    #[serde(default)]
    pub enabled: bool,
    /// Target queue URL.
    #[serde(default)]
    pub queue_url: String,
    /// AWS region (or LocalStack region).
    #[serde(default = "default_region")]
    pub region: String,
    /// Optional endpoint override (e.g. `http://localhost:4566` for LocalStack).
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            queue_url: String::new(),
            region: default_region(),
            endpoint: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}
