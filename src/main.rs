use clap::Parser;
use stock_quote_tui::cli::{self, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    cli::run(args).await
}
