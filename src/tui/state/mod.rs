pub mod app_state;
pub mod header;
pub mod load;
pub mod modes;

pub use app_state::App;
pub use header::HeaderBar;
pub use load::LoadMessage;
pub use modes::{AppMode, LoadStatus};
