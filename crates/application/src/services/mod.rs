//! Application services (use cases)

mod nearest_stop_service;

pub use nearest_stop_service::{NearestStopService, ServiceReadiness, StopLookup};
