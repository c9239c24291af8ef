pub mod app;
pub mod autocomplete;
