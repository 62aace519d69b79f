//! Service layer: authentication, configuration, and shared state.

pub mod auth;

mod error;
mod service_config;
mod service_state;

pub use error::{Result, ServiceError};
pub use service_config::ServiceConfig;
pub use service_state::ServiceState;
