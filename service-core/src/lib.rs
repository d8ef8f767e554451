//! service-core: Shared HTTP infrastructure for the answer service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
