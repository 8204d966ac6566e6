pub mod record;

pub use record::{UserPage, UserRecord};
