//! Progress reporting while the dashboard loads

pub mod reporter;
