pub mod actions;
pub mod persistence;
pub mod settings;
pub mod state;
