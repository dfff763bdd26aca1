use serde::{Deserialize, Serialize};

pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendgridConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub api_token: Option<String>,
}

impl Default for SendgridConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_SENDGRID_API_URL.to_string()
}
