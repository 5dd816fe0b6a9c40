pub mod route;
pub mod route_tests;

pub use route::plan;
