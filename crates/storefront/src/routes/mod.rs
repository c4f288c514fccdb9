//! Static route table - единственный источник правды для destinations.

pub mod routes;

pub use routes::{product_detail_path, RouteMatch, RouteParams, RouteTable, ScreenRoute};
