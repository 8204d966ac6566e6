use crate::tui::state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

use crate::tui::controller::common::HelpContext;
use crate::tui::controller::table::TableContext;
use crate::tui::controller::{handle_help_key, handle_table_key};
use crate::tui::service::loader::{poll_load_messages, start_load, PollContext};
use crate::tui::state::AppMode;
use crate::tui::view::components::modal::render_help_modal;
use crate::tui::view::{render_table, TableViewData};

impl App {
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        if self.load_receiver.is_none() && self.load_status.is_loading() {
            self.load_receiver = Some(start_load(&self.config, &self.session));
        }

        while !self.should_quit {
            self.poll_load();

            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn poll_load(&mut self) {
        let mut ctx = PollContext {
            load_receiver: &mut self.load_receiver,
            records: &mut self.records,
            load_status: &mut self.load_status,
            table_state: &mut self.table_state,
        };
        poll_load_messages(&mut ctx);
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match self.mode {
            AppMode::Table => {
                let mut ctx = TableContext {
                    header: &mut self.header,
                    records: &mut self.records,
                    sort_state: &mut self.sort_state,
                    table_state: &mut self.table_state,
                    mode: &mut self.mode,
                    prev_mode: &mut self.prev_mode,
                    should_quit: &mut self.should_quit,
                };
                handle_table_key(&mut ctx, code)
            }
            AppMode::Help => {
                let mut ctx = HelpContext {
                    mode: &mut self.mode,
                    prev_mode: &mut self.prev_mode,
                };
                handle_help_key(&mut ctx, code)
            }
        }
    }

    fn render(&mut self, f: &mut ratatui::Frame) {
        let data = TableViewData {
            records: &self.records,
            header: &self.header,
            sort_state: self.sort_state,
            load_status: &self.load_status,
            date_format: &self.config.ui.date_format,
            session: &self.session,
        };
        render_table(f, &mut self.table_state, &data);

        if self.mode == AppMode::Help {
            render_help_modal(f);
        }
    }
}
