use crate::config::Config;
use crate::model::UserRecord;
use crate::tui::logic::SortState;
use crate::tui::state::{AppMode, HeaderBar, LoadMessage, LoadStatus};
use ratatui::widgets::TableState;
use std::sync::mpsc::Receiver;

pub struct App {
    pub config: Config,
    pub session: String,
    pub records: Vec<UserRecord>,
    pub sort_state: SortState,
    pub header: HeaderBar,
    pub table_state: TableState,
    pub mode: AppMode,
    pub prev_mode: Option<AppMode>,
    pub load_status: LoadStatus,
    pub load_receiver: Option<Receiver<LoadMessage>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, session: String) -> Self {
        let header = HeaderBar::new(&config.ui.disabled_columns);

        Self {
            config,
            session,
            records: Vec::new(),
            sort_state: SortState::default(),
            header,
            table_state: TableState::default(),
            mode: AppMode::Table,
            prev_mode: None,
            load_status: LoadStatus::Loading,
            load_receiver: None,
            should_quit: false,
        }
    }
}
