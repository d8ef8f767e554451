//! HTTP handlers for the answer service.

pub mod answer;
pub mod health;
pub mod metrics;

pub use answer::{answer, method_not_allowed};
pub use health::health_check;
pub use metrics::metrics_endpoint;
