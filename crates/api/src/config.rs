//! Application configuration loaded from environment variables.

use common::EventInfo;

const DEFAULT_TOTAL_SEATS: u32 = 500;

/// Server and event configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `EVENT_ID` — event identifier (default: `"node-meetup-2025"`)
/// - `EVENT_NAME` — event display name (default: `"Node.js Meet-up"`)
/// - `TOTAL_SEATS` — seat capacity (default: `500`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub event_id: String,
    pub event_name: String,
    pub total_seats: u32,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            event_id: lookup("EVENT_ID").unwrap_or(defaults.event_id),
            event_name: lookup("EVENT_NAME").unwrap_or(defaults.event_name),
            total_seats: lookup("TOTAL_SEATS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.total_seats),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn event_info(&self) -> EventInfo {
        EventInfo::new(self.event_id.as_str(), self.event_name.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        let event = EventInfo::default();
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            event_id: event.event_id,
            event_name: event.name,
            total_seats: DEFAULT_TOTAL_SEATS,
        }
    }
}
