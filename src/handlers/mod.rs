pub mod entries_handler;
pub mod health;
pub mod home;
pub mod metrics;

pub use health::health_check;
pub use home::home;
pub use metrics::{metrics_handler, setup_metrics_recorder, MetricsState};
