#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyCode;
    use httpmock::prelude::*;
    use reqwest::Client;
    use serde_json::json;
    use tokio::time::{sleep, timeout};

    use crate::{
        api::{ImageFetcher, QuoteClient},
        app::{App, QuoteController, app::restore_terminal},
        models::Company,
    };

    fn app_for(server: &MockServer) -> App {
        let http = Client::new();
        App::new(QuoteController::new(
            QuoteClient::new(http.clone(), server.base_url(), None),
            ImageFetcher::new(http),
        ))
    }

    async fn mock_symbol(server: &MockServer, company: Company) -> httpmock::Mock<'_> {
        let symbol = company.symbol();
        let logo_url = server.url(format!("/{}.png", symbol.to_lowercase()));
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/stock/{}/quote", symbol));
                then.status(200).json_body(json!({
                    "company": company.name(),
                    "symbol": symbol,
                    "price": 10.5,
                    "priceChange": 0.5,
                    "logoURL": logo_url
                }));
            })
            .await
    }

    async fn settle(app: &mut App) {
        timeout(Duration::from_secs(5), async {
            while *app.screen().loading() {
                app.poll();
                sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn down_requests_next_company() {
        let server = MockServer::start_async().await;
        let mock = mock_symbol(&server, Company::Microsoft).await;
        let mut app = app_for(&server);

        assert_eq!(app.selected_company(), Some(Company::Apple));
        assert!(app.handle_key(KeyCode::Down));
        assert_eq!(app.selected_company(), Some(Company::Microsoft));
        assert!(*app.screen().loading());

        settle(&mut app).await;
        mock.assert_async().await;
        assert_eq!(app.screen().symbol(), "MSFT");
        assert_eq!(app.screen().company(), "Microsoft");
    }

    #[tokio::test]
    async fn selection_wraps_in_both_directions() {
        let server = MockServer::start_async().await;
        let last = mock_symbol(&server, Company::Facebook).await;
        let first = mock_symbol(&server, Company::Apple).await;
        let mut app = app_for(&server);

        assert!(app.handle_key(KeyCode::Up));
        assert_eq!(app.selected_company(), Some(Company::Facebook));
        settle(&mut app).await;
        last.assert_async().await;
        assert_eq!(app.screen().symbol(), "FB");

        assert!(app.handle_key(KeyCode::Down));
        assert_eq!(app.selected_company(), Some(Company::Apple));
        settle(&mut app).await;
        first.assert_async().await;
        assert_eq!(app.screen().symbol(), "AAPL");
    }

    #[tokio::test]
    async fn alert_swallows_keys_until_dismissed() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/AAPL/quote");
                then.status(500);
            })
            .await;
        let mut app = app_for(&server);

        app.request_selected();
        settle(&mut app).await;
        assert!(app.screen().alert().is_some());
        assert_eq!(app.screen().symbol(), "_");

        assert!(app.handle_key(KeyCode::Down));
        assert_eq!(app.selected_company(), Some(Company::Apple));
        assert!(!*app.screen().loading());
        assert!(app.screen().alert().is_some());

        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.screen().alert().is_none());
        assert!(!*app.screen().loading());
    }

    #[tokio::test]
    async fn escape_dismisses_alert_and_q_quits() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/AAPL/quote");
                then.status(404);
            })
            .await;
        let mut app = app_for(&server);

        app.request_selected();
        settle(&mut app).await;

        assert!(app.handle_key(KeyCode::Esc));
        assert!(app.screen().alert().is_none());
        assert!(app.handle_key(KeyCode::Esc));
        assert!(!*app.screen().loading());
        assert!(!app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn restore_terminal_leaves_alternate_screen() {
        let mut out: Vec<u8> = Vec::new();

        restore_terminal(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
    }
}
