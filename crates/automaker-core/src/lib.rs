pub mod app_spec;
pub mod theme;
