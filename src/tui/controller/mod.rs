pub mod common;
pub mod table;

pub use common::handle_help_key;
pub use table::handle_table_key;
