#[cfg(test)]
mod tests {
    use ratatui::{
        Terminal,
        backend::TestBackend,
        buffer::Buffer,
        style::Color,
        widgets::ListState,
    };
    use reqwest::Url;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        app::{QuoteScreen, QuoteView, ui},
        models::Quote,
    };

    const CHANGE_LABEL: &str = "Change:   ";

    fn quote(change: Decimal) -> Quote {
        Quote::new(
            String::from("Apple"),
            String::from("AAPL"),
            dec!(150.25),
            change,
            Url::parse("https://example.com/aapl.png").unwrap(),
        )
    }

    fn draw(screen: &QuoteScreen) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        let mut picker_state = ListState::default();
        picker_state.select(Some(0));
        terminal
            .draw(|frame| ui::render(frame, screen, &mut picker_state, 0))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn find(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
        let area = buffer.area;
        let chars: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let matches = chars.iter().enumerate().all(|(i, ch)| {
                    buffer
                        .cell((x + i as u16, y))
                        .is_some_and(|cell| cell.symbol() == ch)
                });
                if matches {
                    return Some((x, y));
                }
            }
        }
        None
    }

    /// Text and colours of the price change value next to its label.
    fn change_cells(buffer: &Buffer, len: usize) -> (String, Vec<Color>) {
        let (x, y) = find(buffer, CHANGE_LABEL).unwrap();
        let start = x + CHANGE_LABEL.len() as u16;
        let cells: Vec<_> = (0..len as u16)
            .map(|i| buffer.cell((start + i, y)).unwrap())
            .collect();
        (
            cells.iter().map(|c| c.symbol()).collect(),
            cells.iter().map(|c| c.fg).collect(),
        )
    }

    #[test]
    fn negative_change_is_red() {
        let mut screen = QuoteScreen::new();
        screen.on_quote_ready(&quote(dec!(-1.10)));

        let buffer = draw(&screen);
        let (text, colors) = change_cells(&buffer, 4);

        assert_eq!(text, "-1.1");
        assert!(colors.iter().all(|c| *c == Color::Red));
        assert!(find(&buffer, "150.25").is_some());
        assert!(find(&buffer, "Apple").is_some());
    }

    #[test]
    fn positive_change_is_green() {
        let mut screen = QuoteScreen::new();
        screen.on_quote_ready(&quote(dec!(1.5)));

        let (text, colors) = change_cells(&draw(&screen), 3);

        assert_eq!(text, "1.5");
        assert!(colors.iter().all(|c| *c == Color::Green));
    }

    #[test]
    fn unchanged_price_uses_default_color() {
        let mut screen = QuoteScreen::new();
        screen.on_quote_ready(&quote(dec!(0.0)));

        let (text, colors) = change_cells(&draw(&screen), 1);

        assert_eq!(text, "0");
        assert_eq!(colors, vec![Color::Reset]);
    }

    #[test]
    fn alert_is_drawn_over_the_screen() {
        let mut screen = QuoteScreen::new();
        screen.on_reset();
        screen.on_error();

        let buffer = draw(&screen);

        assert!(find(&buffer, "Something went wrong").is_some());
        assert!(find(&buffer, "Error").is_some());
    }
}
