// src/config.rs
pub const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: resolve_port(std::env::var("PORT").ok()),
        }
    }
}

/// An unset, empty, or unparseable PORT falls back to 3000.
fn resolve_port(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_from_valid_value() {
        assert_eq!(resolve_port(Some("8080".to_string())), 8080);
    }

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(resolve_port(None), DEFAULT_PORT);
    }

    #[test]
    fn port_defaults_when_unparseable() {
        assert_eq!(resolve_port(Some("".to_string())), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("abc".to_string())), DEFAULT_PORT);
        assert_eq!(resolve_port(Some("70000".to_string())), DEFAULT_PORT);
    }
}
