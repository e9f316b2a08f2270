//! Security headers attached to every response

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Cached default security headers configuration
static DEFAULT_CONFIG: Lazy<Arc<SecurityHeadersConfig>> =
    Lazy::new(|| Arc::new(SecurityHeadersConfig::default()));

/// Security headers configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityHeadersConfig {
    pub content_type: String,
    pub x_content_type_options: String,
    pub x_frame_options: String,
    pub x_xss_protection: String,
    /// Strict Transport Security max age in seconds
    pub hsts_max_age: u64,
    pub hsts_include_subdomains: bool,
    pub cache_control: String,
    pub pragma: String,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            content_type: "application/json".to_string(),
            x_content_type_options: "nosniff".to_string(),
            x_frame_options: "DENY".to_string(),
            x_xss_protection: "1; mode=block".to_string(),
            hsts_max_age: 31536000, // 1 year
            hsts_include_subdomains: true,
            cache_control: "no-store, no-cache, must-revalidate".to_string(),
            pragma: "no-cache".to_string(),
        }
    }
}

impl SecurityHeadersConfig {
    /// Get the cached default configuration
    pub fn default_cached() -> Arc<Self> {
        Arc::clone(&DEFAULT_CONFIG)
    }

    fn hsts_value(&self) -> String {
        let mut value = format!("max-age={}", self.hsts_max_age);
        if self.hsts_include_subdomains {
            value.push_str("; includeSubDomains");
        }
        value
    }

    /// Header name to value, in canonical casing
    pub fn to_headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Content-Type".to_string(), self.content_type.clone()),
            (
                "X-Content-Type-Options".to_string(),
                self.x_content_type_options.clone(),
            ),
            ("X-Frame-Options".to_string(), self.x_frame_options.clone()),
            ("X-XSS-Protection".to_string(), self.x_xss_protection.clone()),
            ("Strict-Transport-Security".to_string(), self.hsts_value()),
            ("Cache-Control".to_string(), self.cache_control.clone()),
            ("Pragma".to_string(), self.pragma.clone()),
        ])
    }
}
