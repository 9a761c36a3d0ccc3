use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;

use crate::{
    app::{controller::QuoteView, utils::format_decimal},
    models::{Logo, PriceTrend, Quote},
};

pub const PLACEHOLDER: &str = "_";
pub const PENDING: &str = "-";

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Alert {
    title: String,
    message: String,
}

impl Alert {
    pub fn generic() -> Self {
        Self::new(String::from("Error"), String::from("Something went wrong"))
    }
}

/// Display state of the quote panel.
#[derive(Clone, Debug, Getters)]
pub struct QuoteScreen {
    company: String,
    symbol: String,
    price: String,
    price_change: String,
    trend: PriceTrend,
    loading: bool,
    alert: Option<Alert>,
    logo: Option<Logo>,
    updated_at: Option<DateTime<Local>>,
}

impl Default for QuoteScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteScreen {
    pub fn new() -> Self {
        Self {
            company: PENDING.to_string(),
            symbol: PLACEHOLDER.to_string(),
            price: PLACEHOLDER.to_string(),
            price_change: PLACEHOLDER.to_string(),
            trend: PriceTrend::Flat,
            loading: false,
            alert: None,
            logo: None,
            updated_at: None,
        }
    }

    pub fn begin_request(&mut self) {
        self.loading = true;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

impl QuoteView for QuoteScreen {
    fn on_quote_ready(&mut self, quote: &Quote) {
        self.loading = false;
        self.company = quote.company().clone();
        self.symbol = quote.symbol().clone();
        self.price = format_decimal(quote.price());
        self.price_change = format_decimal(quote.price_change());
        self.trend = quote.trend();
        self.updated_at = Some(*quote.fetched_at());
    }

    fn on_reset(&mut self) {
        self.loading = false;
        self.company = PLACEHOLDER.to_string();
        self.symbol = PLACEHOLDER.to_string();
        self.price = PLACEHOLDER.to_string();
        self.price_change = PLACEHOLDER.to_string();
        self.trend = PriceTrend::Flat;
    }

    fn on_error(&mut self) {
        self.alert = Some(Alert::generic());
    }

    fn on_logo(&mut self, logo: Logo) {
        self.logo = Some(logo);
    }
}
