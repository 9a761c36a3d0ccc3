use std::{
    io::{self, Write},
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::ListState,
};

use crate::{
    app::{
        QuoteController, QuoteScreen, ui,
        utils::{next_row, previous_row},
    },
    models::Company,
};

const TICK_RATE: Duration = Duration::from_millis(100);

pub struct App {
    controller: QuoteController,
    screen: QuoteScreen,
    picker_state: ListState,
    tick: usize,
}

impl App {
    pub fn new(controller: QuoteController) -> Self {
        let mut picker_state = ListState::default();
        picker_state.select(Some(0));
        Self {
            controller,
            screen: QuoteScreen::new(),
            picker_state,
            tick: 0,
        }
    }

    pub fn screen(&self) -> &QuoteScreen {
        &self.screen
    }

    pub fn selected_company(&self) -> Option<Company> {
        self.picker_state.selected().and_then(Company::from_row)
    }

    pub fn request_selected(&mut self) {
        if let Some(company) = self.selected_company() {
            info!("Requesting quote for {} ({})", company, company.symbol());
            self.screen.begin_request();
            self.controller.request_quote(company.symbol());
        }
    }

    /// Applies completed requests to the screen.
    pub fn poll(&mut self) -> usize {
        self.controller.poll(&mut self.screen)
    }

    /// Returns `false` once the user asks to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.screen.alert().is_some() {
            match code {
                KeyCode::Char('q') => return false,
                KeyCode::Enter | KeyCode::Esc => self.screen.dismiss_alert(),
                _ => {}
            }
            return true;
        }

        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Down => {
                let row = next_row(self.picker_state.selected(), Company::count());
                self.picker_state.select(row);
                self.request_selected();
            }
            KeyCode::Up => {
                let row = previous_row(self.picker_state.selected(), Company::count());
                self.picker_state.select(row);
                self.request_selected();
            }
            KeyCode::Enter | KeyCode::Char('r') => self.request_selected(),
            _ => {}
        }
        true
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            abandon_terminal(&mut stdout);
            return Err(e.into());
        }
        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                abandon_terminal(&mut io::stdout());
                return Err(e.into());
            }
        };

        let result = self.run_app(&mut terminal).await;

        restore_terminal(terminal.backend_mut())?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.request_selected();

        loop {
            self.poll();

            terminal.draw(|frame| {
                ui::render(frame, &self.screen, &mut self.picker_state, self.tick)
            })?;
            self.tick = self.tick.wrapping_add(1);

            if !event::poll(TICK_RATE)? {
                tokio::task::yield_now().await;
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !self.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Leaves raw mode and the alternate screen.
pub fn restore_terminal<W: Write>(out: &mut W) -> Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn abandon_terminal<W: Write>(out: &mut W) {
    if let Err(e) = restore_terminal(out) {
        warn!("Failed to restore terminal: {}", e);
    }
}
