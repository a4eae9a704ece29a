//! Thread-safe access to a [`Hotel`](hotel_domain::Hotel) with the ambient
//! pieces a host process needs: environment configuration, tracing setup,
//! and operation metrics.

pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

pub use config::{Config, LogFormat};
pub use error::ServiceError;
pub use service::HotelService;
pub use telemetry::init_tracing;
