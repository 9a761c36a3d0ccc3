use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use reqwest::Url;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Getters, new)]
pub struct Quote {
    company: String,
    symbol: String,
    price: Decimal,
    price_change: Decimal,
    logo_url: Url,
    #[new(value = "Local::now()")]
    fetched_at: DateTime<Local>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PriceTrend {
    Up,
    Down,
    #[default]
    Flat,
}

impl PriceTrend {
    pub fn from_change(change: Decimal) -> Self {
        if change > Decimal::ZERO {
            PriceTrend::Up
        } else if change < Decimal::ZERO {
            PriceTrend::Down
        } else {
            PriceTrend::Flat
        }
    }
}

impl Quote {
    pub fn trend(&self) -> PriceTrend {
        PriceTrend::from_change(self.price_change)
    }
}
