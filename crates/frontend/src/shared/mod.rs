pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod filters_store;
pub mod payload;
pub mod use_api;
