use std::path::PathBuf;

use anyhow::{Context, Error, Result};
use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;

use crate::{
    api::{ImageFetcher, QuoteClient},
    app::{
        App, QuoteController,
        utils::{format_decimal, format_size},
    },
    config::Config,
    logging,
    models::{Company, Logo, Quote},
};

#[derive(Debug, Parser)]
#[command(name = "stock-quote-tui", version, about = "A terminal-based stock quote viewer")]
pub struct Args {
    /// Base URL of the quote API
    #[arg(long)]
    pub base_url: Option<String>,

    /// API token appended to every quote request
    #[arg(long)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Log file used while the terminal UI is running
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Open the interactive quote screen (default)
    Tui,
    /// List the available companies
    Companies,
    /// Print the latest quote for a company name or ticker
    Quote { company: String },
}

impl Args {
    pub fn config(&self) -> Result<Config> {
        Ok(Config::from_env()?
            .with_base_url(self.base_url.clone())
            .with_api_token(self.token.clone())
            .with_timeout_secs(self.timeout)
            .with_log_file(self.log_file.clone()))
    }
}

pub async fn run(args: Args) -> Result<()> {
    match args.command.as_ref().unwrap_or(&Command::Tui) {
        Command::Tui => {
            let config = args.config()?;
            logging::init_file_logger(config.log_file())?;
            let controller = QuoteController::from_config(&config)?;
            let mut app = App::new(controller);
            app.run().await
        }
        Command::Companies => {
            print!("{}", format_companies());
            Ok(())
        }
        Command::Quote { company } => {
            logging::init_stderr_logger()?;
            let company = resolve_company(company)?;
            let config = args.config()?;
            let http = config.http_client()?;
            let client = QuoteClient::new(
                http.clone(),
                config.base_url(),
                config.api_token().clone(),
            );
            let quote = client
                .get_quote(company.symbol())
                .await
                .with_context(|| format!("Failed to get quote for {}", company.symbol()))?;
            let logo = ImageFetcher::new(http).fetch_logo(quote.logo_url()).await;
            println!("{}", format_quote(&quote, logo.as_ref()));
            Ok(())
        }
    }
}

pub fn resolve_company(query: &str) -> Result<Company> {
    Company::find(query).ok_or_else(|| {
        let known = Company::iter()
            .map(|c| c.symbol())
            .collect::<Vec<_>>()
            .join(", ");
        Error::msg(format!("Unknown company '{}'. Expected one of: {}", query, known))
    })
}

pub fn format_companies() -> String {
    Company::iter()
        .map(|c| format!("{:<10} {}\n", c.name(), c.symbol()))
        .collect()
}

pub fn format_quote(quote: &Quote, logo: Option<&Logo>) -> String {
    let logo = match logo {
        Some(logo) => format!("{} ({})", logo.format(), format_size(logo.size())),
        None => String::from("unavailable"),
    };

    format!(
        "Company: {}\nSymbol:  {}\nPrice:   {}\nChange:  {}\nLogo:    {} {}",
        quote.company(),
        quote.symbol(),
        format_decimal(quote.price()),
        format_decimal(quote.price_change()),
        quote.logo_url(),
        logo
    )
}
