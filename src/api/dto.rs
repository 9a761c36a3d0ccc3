use derive_getters::Getters;
use derive_new::new;
use reqwest::Url;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    api::{ApiError, ApiResult},
    models::Quote,
};

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    #[serde(alias = "company")]
    company_name: String,
    symbol: String,
    #[serde(alias = "price")]
    latest_price: Decimal,
    #[serde(alias = "priceChange")]
    change: Decimal,
    #[serde(default, alias = "logoURL")]
    logo_url: Option<String>,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct LogoDto {
    url: String,
}

impl QuoteDto {
    pub fn to_quote(&self, logo_url: &str) -> ApiResult<Quote> {
        let logo_url = Url::parse(logo_url).map_err(|e| ApiError::InvalidLogoUrl {
            url: logo_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Quote::new(
            self.company_name.clone(),
            self.symbol.clone(),
            self.latest_price,
            self.change,
            logo_url,
        ))
    }
}
