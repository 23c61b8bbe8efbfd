//! Types shared between the dashboard frontend and the API proxy.

pub mod enums;
pub mod shared;
