//! Template engine for the HTML pages
//!
//! Uses Tera with four pages embedded in the binary:
//! - `index.html`: search form
//! - `mbta_station.html`: lookup result
//! - `error.html`: failure message
//! - `base.html`: shared layout the others extend
//!
//! Any `*.html` file in the configured `templates_dir` replaces the embedded
//! page of the same name.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_error("Please enter a valid place name.")?;
//! ```

use application::StopLookup;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Name of the search form page
pub const INDEX_TEMPLATE: &str = "index.html";
/// Name of the lookup result page
pub const STATION_TEMPLATE: &str = "mbta_station.html";
/// Name of the error page
pub const ERROR_TEMPLATE: &str = "error.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Data shown on the lookup result page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationPageData {
    /// Place as the user typed it (trimmed)
    pub place: String,
    /// Name of the nearest stop
    pub stop_name: String,
    /// Tri-state accessibility: `true`, `false` or absent when unknown
    pub is_accessible: Option<bool>,
    /// Human-readable accessibility label
    pub accessibility_label: String,
    /// Latitude the place resolved to
    pub latitude: f64,
    /// Longitude the place resolved to
    pub longitude: f64,
    /// Weather summary; nothing fills this yet
    #[serde(default)]
    pub weather: Option<String>,
}

impl From<&StopLookup> for StationPageData {
    fn from(lookup: &StopLookup) -> Self {
        let accessibility = lookup.stop.wheelchair_accessible;
        Self {
            place: lookup.place.as_str().to_string(),
            stop_name: lookup.stop.name.clone(),
            is_accessible: accessibility.is_accessible(),
            accessibility_label: accessibility.label().to_string(),
            latitude: lookup.location.latitude(),
            longitude: lookup.location.longitude(),
            weather: None,
        }
    }
}

/// Template engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Path to custom templates directory (optional)
    #[serde(default)]
    pub templates_dir: Option<String>,

    /// Whether to fall back to embedded templates when the directory fails to load
    #[serde(default = "default_true")]
    pub use_embedded_fallback: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            use_embedded_fallback: true,
        }
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const BASE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}NearStop{% endblock title %}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
        .accessible { color: #1b7f3b; }
        .not-accessible { color: #b3261e; }
        .unknown { color: #666; }
        .error { color: #b3261e; }
    </style>
</head>
<body>
    <h1><a href="/">NearStop</a></h1>
    {% block content %}{% endblock content %}
</body>
</html>
"#;

    pub const INDEX: &str = r#"{% extends "base.html" %}
{% block content %}
<p>Find the MBTA stop closest to any place in the Boston area.</p>
<form action="/nearest_mbta" method="post">
    <label for="place">Place name</label>
    <input type="text" id="place" name="place" placeholder="Boston Common" required>
    <button type="submit">Find nearest stop</button>
</form>
{% endblock content %}
"#;

    pub const STATION: &str = r#"{% extends "base.html" %}
{% block title %}Nearest stop to {{ place }}{% endblock title %}
{% block content %}
<h2>Nearest MBTA stop to {{ place }}</h2>
<p class="stop">{{ stop_name }}</p>
<p class="{{ accessibility_class }}">{{ accessibility_label }}</p>
{% if weather %}
<p class="weather">{{ weather }}</p>
{% endif %}
<p><a href="/">Search again</a></p>
{% endblock content %}
"#;

    pub const ERROR: &str = r#"{% extends "base.html" %}
{% block title %}Error{% endblock title %}
{% block content %}
<h2>Something went wrong</h2>
<p class="error">{{ error }}</p>
<p><a href="/">Try another place</a></p>
{% endblock content %}
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
    config: TemplateConfig,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with default configuration
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_config(TemplateConfig::default())
    }

    /// Create a new template engine with custom configuration
    pub fn with_config(config: TemplateConfig) -> Result<Self, TemplateError> {
        let mut tera = embedded_tera()?;

        if let Some(ref dir) = config.templates_dir {
            match load_custom_templates(Path::new(dir)) {
                Ok(custom) if custom.is_empty() => {
                    debug!(dir = %dir, "No custom templates found");
                },
                Ok(custom) => {
                    let count = custom.len();
                    match tera.add_raw_templates(custom) {
                        Ok(()) => info!(dir = %dir, count, "Loaded custom templates"),
                        Err(e) if config.use_embedded_fallback => {
                            warn!(dir = %dir, error = %e, "Custom templates failed to compile, using embedded");
                            tera = embedded_tera()?;
                        },
                        Err(e) => return Err(TemplateError::Compile(e.to_string())),
                    }
                },
                Err(e) if config.use_embedded_fallback => {
                    warn!(dir = %dir, error = %e, "Custom templates failed to load, using embedded");
                },
                Err(e) => return Err(TemplateError::Compile(e.to_string())),
            }
        }

        Ok(Self {
            tera: Arc::new(tera),
            config,
        })
    }

    fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, context)
            .map_err(TemplateError::from)
    }

    /// Render the search form
    pub fn render_index(&self) -> Result<String, TemplateError> {
        self.render(INDEX_TEMPLATE, &Context::new())
    }

    /// Render the lookup result page
    pub fn render_station(&self, data: &StationPageData) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("place", &data.place);
        ctx.insert("stop_name", &data.stop_name);
        ctx.insert("is_accessible", &data.is_accessible);
        ctx.insert(
            "accessibility_class",
            match data.is_accessible {
                Some(true) => "accessible",
                Some(false) => "not-accessible",
                None => "unknown",
            },
        );
        ctx.insert("accessibility_label", &data.accessibility_label);
        ctx.insert("latitude", &data.latitude);
        ctx.insert("longitude", &data.longitude);
        ctx.insert("weather", &data.weather);

        self.render(STATION_TEMPLATE, &ctx)
    }

    /// Render the error page with a user-facing message
    pub fn render_error(&self, message: &str) -> Result<String, TemplateError> {
        let mut ctx = Context::new();
        ctx.insert("error", message);

        self.render(ERROR_TEMPLATE, &ctx)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

fn embedded_tera() -> Result<Tera, TemplateError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html"]);

    // Added together so `extends` resolves
    tera.add_raw_templates(vec![
        ("base.html", embedded::BASE),
        (INDEX_TEMPLATE, embedded::INDEX),
        (STATION_TEMPLATE, embedded::STATION),
        (ERROR_TEMPLATE, embedded::ERROR),
    ])
    .map_err(|e| TemplateError::Compile(e.to_string()))?;

    Ok(tera)
}

/// Read every `*.html` file directly inside `dir`
fn load_custom_templates(dir: &Path) -> std::io::Result<Vec<(String, String)>> {
    let mut templates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "html") {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                let content = std::fs::read_to_string(&path)?;
                debug!(template = %name, "Read custom template");
                templates.push((name.to_string(), content));
            }
        }
    }
    Ok(templates)
}
