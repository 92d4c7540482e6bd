pub mod api_utils;
pub mod config;
pub mod notify;
