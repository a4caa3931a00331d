/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const NEXT_DATE_ROUTE_COMPONENT: &str = "nextdate";
pub const NEXT_DATE_ROUTE: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", NEXT_DATE_ROUTE_COMPONENT);

pub const HEALTHCHECK_ROUTE_COMPONENT: &str = "healthcheck";
pub const HEALTHCHECK_ROUTE: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", HEALTHCHECK_ROUTE_COMPONENT);

/// Prefix for environment variables read by [`crate::config::Settings::load`].
pub const ENV_PREFIX: &str = "TODO";
