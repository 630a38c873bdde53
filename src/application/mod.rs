//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Short link orchestration

pub mod services;
