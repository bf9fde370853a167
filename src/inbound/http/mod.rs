//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod pull_requests;
pub mod schemas;
pub mod state;
pub mod teams;
#[cfg(test)]
pub mod test_support;
pub mod users;
pub mod validation;

pub use error::ApiResult;
