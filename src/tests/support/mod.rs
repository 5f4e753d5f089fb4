pub mod app_state_builder;
pub mod catalog_fixtures;
pub mod stubs;
