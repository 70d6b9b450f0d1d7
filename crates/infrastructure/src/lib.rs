//! Infrastructure layer - Adapters, configuration and page templates
//!
//! Implements the application ports on top of the Mapbox and MBTA clients
//! and loads the runtime configuration.

pub mod adapters;
pub mod config;
pub mod templates;

pub use adapters::*;
pub use config::{
    AppConfig, Environment, MAPBOX_SECRET_KEY, MBTA_SECRET_KEY, MapboxAppConfig, MbtaAppConfig,
    ServerConfig,
};
pub use templates::{StationPageData, TemplateConfig, TemplateEngine, TemplateError};
