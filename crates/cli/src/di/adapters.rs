use blockwatch_application::ports::{BlockNotifier, BlockSource};
use blockwatch_domain::Config;
use blockwatch_infrastructure::http::build_http_client;
use blockwatch_infrastructure::sendgrid::SendgridBlockSource;
use blockwatch_infrastructure::webhook::WebhookNotifier;
use std::sync::Arc;
use std::time::Duration;

pub struct Adapters {
    pub block_source: Arc<dyn BlockSource>,
    pub notifier: Arc<dyn BlockNotifier>,
}

impl Adapters {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let timeout = config.polling.request_timeout.map(Duration::from_secs);
        let http_client = build_http_client(timeout)?;

        let block_source = SendgridBlockSource::new(
            http_client.clone(),
            &config.sendgrid.api_url,
            config.sendgrid_token()?,
        );
        let notifier = WebhookNotifier::new(http_client, config.webhook_url()?);

        Ok(Self {
            block_source: Arc::new(block_source),
            notifier: Arc::new(notifier),
        })
    }
}
