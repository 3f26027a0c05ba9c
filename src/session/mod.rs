pub mod history;
pub mod manager;
pub mod state;
pub mod title;
