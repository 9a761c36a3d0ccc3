use log::{debug, warn};
use reqwest::Client;

use crate::{
    api::{
        ApiError, ApiResult,
        dto::{LogoDto, QuoteDto},
        utils::{make_request, parse_response_object},
    },
    models::Quote,
};

#[derive(Clone, Debug)]
pub struct QuoteClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl QuoteClient {
    pub fn new(client: Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token,
        }
    }

    /// Fetches the quote on the runtime and hands the result to `on_complete`.
    ///
    /// The callback runs on a runtime worker; callers that own UI state must
    /// forward the result to their own thread.
    pub fn send_request<F>(&self, symbol: &str, on_complete: F)
    where
        F: FnOnce(ApiResult<Quote>) + Send + 'static,
    {
        let this = self.clone();
        let symbol = symbol.to_string();
        tokio::spawn(async move {
            let result = this.get_quote(&symbol).await;
            if let Err(e) = &result {
                warn!("Quote request for '{}' failed: {}", symbol, e);
            }
            on_complete(result);
        });
    }

    pub async fn get_quote(&self, symbol: &str) -> ApiResult<Quote> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ApiError::EmptySymbol);
        }

        debug!("Requesting quote for {}", symbol);
        let res = make_request(
            &self.client,
            &self.base_url,
            &format!("stock/{}/quote", symbol),
            self.token.as_deref(),
        )
        .await?;
        let dto = parse_response_object::<QuoteDto>(
            res,
            &format!("Failed to parse quote for {}", symbol),
        )?;

        if !dto.symbol().eq_ignore_ascii_case(symbol) {
            return Err(ApiError::SymbolMismatch {
                requested: symbol.to_string(),
                received: dto.symbol().clone(),
            });
        }

        let logo_url = match dto.logo_url() {
            Some(url) => url.clone(),
            None => self.get_logo_url(symbol).await?,
        };

        let quote = dto.to_quote(&logo_url)?;
        debug!(
            "Received quote for {}: {} ({})",
            quote.symbol(),
            quote.price(),
            quote.price_change()
        );

        Ok(quote)
    }

    async fn get_logo_url(&self, symbol: &str) -> ApiResult<String> {
        let res = make_request(
            &self.client,
            &self.base_url,
            &format!("stock/{}/logo", symbol),
            self.token.as_deref(),
        )
        .await?;
        let logo = parse_response_object::<LogoDto>(
            res,
            &format!("Failed to parse logo for {}", symbol),
        )?;

        Ok(logo.url().clone())
    }
}
