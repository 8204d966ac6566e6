pub mod app;
pub mod controller;
pub mod logic;
pub mod service;
pub mod state;
pub mod terminal;
pub mod view;

pub use state::App;
