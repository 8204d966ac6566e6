use crate::cache::SessionCache;
use crate::model::UserRecord;
use crate::source::{RecordSource, SourceResult};

/// Cache key the dataset is stored under.
pub const DATASET_KEY: &str = "userdata";

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<UserRecord>,
    pub from_cache: bool,
}

/// Returns the session's stored dataset when present, otherwise fetches
/// from `source` and stores the result. Cache failures are logged and
/// never fail the load.
pub fn load_dataset(
    cache: Option<&dyn SessionCache>,
    source: &dyn RecordSource,
) -> SourceResult<Dataset> {
    if let Some(cache) = cache {
        match cache.get(DATASET_KEY) {
            Ok(Some(stored)) => match serde_json::from_str::<Vec<UserRecord>>(&stored) {
                Ok(records) => {
                    tracing::info!(count = records.len(), "using cached dataset");
                    return Ok(Dataset {
                        records,
                        from_cache: true,
                    });
                }
                Err(e) => tracing::warn!("ignoring unreadable cached dataset: {}", e),
            },
            Ok(None) => {}
            Err(e) => tracing::warn!("session cache read failed: {}", e),
        }
    }

    let records = source.fetch()?;
    tracing::info!(count = records.len(), "fetched dataset");

    if let Some(cache) = cache {
        match serde_json::to_string(&records) {
            Ok(payload) => {
                if let Err(e) = cache.set(DATASET_KEY, &payload) {
                    tracing::warn!("session cache write failed: {}", e);
                }
            }
            Err(e) => tracing::warn!("could not serialize dataset for cache: {}", e),
        }
    }

    Ok(Dataset {
        records,
        from_cache: false,
    })
}
