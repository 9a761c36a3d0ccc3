use log::debug;
use reqwest::{Client, Url, header::CONTENT_TYPE};

use crate::models::Logo;

#[derive(Clone, Debug)]
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Downloads the image and passes it to `on_success`. Failures are dropped.
    pub fn fetch<F>(&self, url: &Url, on_success: F)
    where
        F: FnOnce(Logo) + Send + 'static,
    {
        let this = self.clone();
        let url = url.clone();
        tokio::spawn(async move {
            if let Some(logo) = this.fetch_logo(&url).await {
                on_success(logo);
            }
        });
    }

    pub async fn fetch_logo(&self, url: &Url) -> Option<Logo> {
        let res = match self.client.get(url.clone()).send().await {
            Ok(res) => res,
            Err(e) => {
                debug!("Logo request to {} failed: {}", url, e);
                return None;
            }
        };

        if !res.status().is_success() {
            debug!("Logo request to {} returned {}", url, res.status());
            return None;
        }

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        match res.bytes().await {
            Ok(bytes) if !bytes.is_empty() => Some(Logo::new(bytes.to_vec(), content_type)),
            Ok(_) => {
                debug!("Logo at {} is empty", url);
                None
            }
            Err(e) => {
                debug!("Failed to read logo body from {}: {}", url, e);
                None
            }
        }
    }
}
