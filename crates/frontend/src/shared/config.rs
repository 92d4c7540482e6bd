//! Frontend configuration
//!
//! Everything here is fixed at build time. The API base URL can be pinned
//! with `API_BASE_URL=https://api.example.com trunk build`; otherwise it is
//! derived from the page location.

/// Port the backend listens on when the base URL is derived from the page
pub const BACKEND_PORT: u16 = 3000;

/// Build-time override for the API base URL
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("API_BASE_URL");

/// Default route, used after saving and when a record cannot be loaded
pub const HOME_ROUTE: &str = "/";

/// Department list, served outside this app; links to it use `rel="external"`
pub const DEPARTMENTS_ROUTE: &str = "/departamentos";

pub const DEPARTMENTS_ENDPOINT: &str = "/api/departments";
