pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod models;
pub mod store;
pub mod summary;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
