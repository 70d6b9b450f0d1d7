//! Domain entities produced by the lookup pipeline

mod nearest_stop;

pub use nearest_stop::{NearestStop, WheelchairAccessibility};
