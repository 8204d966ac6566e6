use crate::model::UserRecord;

pub enum LoadMessage {
    Loaded {
        records: Vec<UserRecord>,
        from_cache: bool,
    },
    Failed {
        error: String,
    },
}
