#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Table,
    Help,
}

/// Progress of the one-shot startup load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready { from_cache: bool },
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}
