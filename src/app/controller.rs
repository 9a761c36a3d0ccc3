use anyhow::Result;
use log::debug;
use reqwest::Url;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::{
    api::{ApiResult, ImageFetcher, QuoteClient},
    config::Config,
    models::{Logo, Quote},
};

/// The surface a quote result is projected onto.
pub trait QuoteView {
    fn on_quote_ready(&mut self, quote: &Quote);
    fn on_reset(&mut self);
    fn on_error(&mut self);
    fn on_logo(&mut self, logo: Logo);
}

/// A completed network call, tagged with the request generation it belongs to.
#[derive(Debug)]
pub enum QuoteEvent {
    Quote {
        generation: u64,
        result: ApiResult<Quote>,
    },
    Logo {
        generation: u64,
        logo: Logo,
    },
}

impl QuoteEvent {
    pub fn generation(&self) -> u64 {
        match self {
            QuoteEvent::Quote { generation, .. } | QuoteEvent::Logo { generation, .. } => {
                *generation
            }
        }
    }
}

pub struct QuoteController {
    client: QuoteClient,
    fetcher: ImageFetcher,
    generation: u64,
    tx: UnboundedSender<QuoteEvent>,
    rx: UnboundedReceiver<QuoteEvent>,
}

impl QuoteController {
    pub fn new(client: QuoteClient, fetcher: ImageFetcher) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            client,
            fetcher,
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = config.http_client()?;
        Ok(Self::new(
            QuoteClient::new(http.clone(), config.base_url(), config.api_token().clone()),
            ImageFetcher::new(http),
        ))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a quote request; any earlier request still in flight becomes stale.
    pub fn request_quote(&mut self, symbol: &str) -> u64 {
        self.generation += 1;

        let generation = self.generation;
        let tx = self.tx.clone();
        self.client.send_request(symbol, move |result| {
            if tx.send(QuoteEvent::Quote { generation, result }).is_err() {
                debug!("Quote receiver dropped (generation {})", generation);
            }
        });

        generation
    }

    fn request_logo(&self, url: &Url, generation: u64) {
        let tx = self.tx.clone();
        self.fetcher.fetch(url, move |logo| {
            if tx.send(QuoteEvent::Logo { generation, logo }).is_err() {
                debug!("Logo receiver dropped (generation {})", generation);
            }
        });
    }

    pub fn dispatch<V: QuoteView>(&mut self, event: QuoteEvent, view: &mut V) {
        if event.generation() != self.generation {
            debug!(
                "Dropping stale completion (generation {}, current {})",
                event.generation(),
                self.generation
            );
            return;
        }

        match event {
            QuoteEvent::Quote { generation, result } => match result {
                Ok(quote) => {
                    view.on_quote_ready(&quote);
                    self.request_logo(quote.logo_url(), generation);
                }
                Err(_) => {
                    view.on_reset();
                    view.on_error();
                }
            },
            QuoteEvent::Logo { logo, .. } => view.on_logo(logo),
        }
    }

    /// Applies every completion that has arrived so far. Never blocks.
    pub fn poll<V: QuoteView>(&mut self, view: &mut V) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event, view);
            applied += 1;
        }
        applied
    }

    pub async fn next_event(&mut self) -> Option<QuoteEvent> {
        self.rx.recv().await
    }
}
