use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use crate::{
    app::{QuoteScreen, utils::format_size},
    models::{Company, PriceTrend},
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn trend_color(trend: PriceTrend) -> Color {
    match trend {
        PriceTrend::Up => Color::Green,
        PriceTrend::Down => Color::Red,
        PriceTrend::Flat => Color::Reset,
    }
}

pub fn render(frame: &mut Frame, screen: &QuoteScreen, picker_state: &mut ListState, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("Stock Quotes")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[1]);

    let items: Vec<ListItem> = Company::iter()
        .map(|company| ListItem::new(company.name()))
        .collect();
    let picker = List::new(items)
        .block(Block::default().title("Company").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(picker, body[0], picker_state);

    render_quote(frame, screen, body[1], tick);

    let help = Paragraph::new("↑/↓ select  r refresh  q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);

    if let Some(alert) = screen.alert() {
        let area = centered_rect(40, 5, frame.area());
        let popup = Paragraph::new(vec![
            Line::from(alert.message().as_str()),
            Line::from(Span::styled(
                "Press Enter to dismiss",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .title(alert.title().as_str())
                .borders(Borders::ALL),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}

fn render_quote(frame: &mut Frame, screen: &QuoteScreen, area: Rect, tick: usize) {
    let label = Style::default().fg(Color::Yellow);

    let logo = match screen.logo() {
        Some(logo) => format!("{} ({})", logo.format(), format_size(logo.size())),
        None => String::from("-"),
    };
    let updated = screen
        .updated_at()
        .as_ref()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| String::from("-"));

    let lines = vec![
        Line::from(vec![
            Span::styled("Company:  ", label),
            Span::raw(screen.company().as_str()),
        ]),
        Line::from(vec![
            Span::styled("Symbol:   ", label),
            Span::raw(screen.symbol().as_str()),
        ]),
        Line::from(vec![
            Span::styled("Price:    ", label),
            Span::raw(screen.price().as_str()),
        ]),
        Line::from(vec![
            Span::styled("Change:   ", label),
            Span::styled(
                screen.price_change().as_str(),
                Style::default().fg(trend_color(*screen.trend())),
            ),
        ]),
        Line::from(vec![Span::styled("Logo:     ", label), Span::raw(logo)]),
        Line::from(vec![Span::styled("Updated:  ", label), Span::raw(updated)]),
    ];

    let title = if *screen.loading() {
        format!("Quote {}", SPINNER[tick % SPINNER.len()])
    } else {
        String::from("Quote")
    };

    let panel = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
