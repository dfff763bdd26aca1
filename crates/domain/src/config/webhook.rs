use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,
}
