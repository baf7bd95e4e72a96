//! Enhancer configuration
//!
//! Captures the markup contract the enhancer operates against (tooltip
//! trigger attribute, nav classes, active marker) and the runtime
//! defaults. The original page read its location from the browser
//! ambient; here the current path is explicit configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancerConfig {
    pub id: String,

    /// Path of the page being enhanced, compared against nav link hrefs
    pub current_path: String,

    /// Attribute/value pair that flags tooltip trigger elements
    pub tooltip_attr: String,
    pub tooltip_value: String,

    /// Nav links are elements with `nav_link_class` under a container
    /// carrying `nav_container_class`
    pub nav_container_class: String,
    pub nav_link_class: String,

    /// Marker class added to the nav link matching the current path
    pub active_class: String,

    /// Auto-dismiss delay for notifications
    pub default_notification_ms: u64,

    /// Base URL prefix for the typed API endpoints
    pub api_base_url: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            current_path: "/".to_string(),
            tooltip_attr: "data-bs-toggle".to_string(),
            tooltip_value: "tooltip".to_string(),
            nav_container_class: "navbar-nav".to_string(),
            nav_link_class: "nav-link".to_string(),
            active_class: "active".to_string(),
            default_notification_ms: 3000,
            api_base_url: "http://localhost:8000".to_string(),
        }
    }
}
