use crate::cache::{FileSessionCache, MemorySessionCache, SessionCache};
use crate::config::Config;
use crate::dataset::load_dataset;
use crate::model::UserRecord;
use crate::source::HttpSource;
use crate::tui::state::{LoadMessage, LoadStatus};
use ratatui::widgets::TableState;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

/// Builds the session cache configured for `session`, or `None` when
/// caching is off. An unusable session name falls back to a cache that
/// lives only as long as this process.
pub fn session_cache(config: &Config, session: &str) -> Option<Box<dyn SessionCache>> {
    if !config.cache.enabled {
        return None;
    }

    match FileSessionCache::new(&Config::cache_dir(), session) {
        Ok(cache) => Some(Box::new(cache)),
        Err(e) => {
            tracing::warn!("{}; caching in memory only", e);
            Some(Box::new(MemorySessionCache::new()))
        }
    }
}

/// Runs the one-shot startup load on a worker thread.
pub fn start_load(config: &Config, session: &str) -> Receiver<LoadMessage> {
    let (tx, rx) = channel();
    let source_config = config.source.clone();
    let cache = session_cache(config, session);

    thread::spawn(move || {
        let result = HttpSource::new(&source_config).and_then(|source| {
            load_dataset(cache.as_deref(), &source)
        });

        let message = match result {
            Ok(dataset) => LoadMessage::Loaded {
                records: dataset.records,
                from_cache: dataset.from_cache,
            },
            Err(e) => {
                tracing::error!("failed to load users: {}", e);
                LoadMessage::Failed {
                    error: e.to_string(),
                }
            }
        };
        let _ = tx.send(message);
    });

    rx
}

pub struct PollContext<'a> {
    pub load_receiver: &'a mut Option<Receiver<LoadMessage>>,
    pub records: &'a mut Vec<UserRecord>,
    pub load_status: &'a mut LoadStatus,
    pub table_state: &'a mut TableState,
}

pub fn poll_load_messages(ctx: &mut PollContext) {
    let Some(rx) = ctx.load_receiver.as_ref() else {
        return;
    };

    match rx.try_recv() {
        Ok(LoadMessage::Loaded {
            records,
            from_cache,
        }) => {
            *ctx.records = records;
            *ctx.load_status = LoadStatus::Ready { from_cache };
            ctx.table_state
                .select(if ctx.records.is_empty() { None } else { Some(0) });
            *ctx.load_receiver = None;
        }
        Ok(LoadMessage::Failed { error }) => {
            ctx.records.clear();
            *ctx.load_status = LoadStatus::Failed(error);
            *ctx.load_receiver = None;
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            *ctx.load_status = LoadStatus::Failed("loader exited unexpectedly".to_string());
            *ctx.load_receiver = None;
        }
    }
}
