pub mod api_request;
pub mod endpoint;
pub mod fetch_state;
pub mod filters;
pub mod query_params;
