use std::env;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, resolved from CLI flags and environment.
///
/// Whether the backend runs same-origin or on a fixed port is a
/// deployment decision, so the base URL is a single configurable value
/// rather than a constant.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    /// The base URL flag already carries RIDE_BASE_URL (clap fills it
    /// from the environment), so `None` here means use the default.
    pub fn load(base_url_flag: Option<String>) -> Self {
        let base_url = base_url_flag.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("RIDE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Config {
            base_url: normalize_base_url(&base_url),
            timeout_secs,
        }
    }
}

/// Trims trailing slashes so endpoint paths can always be joined as
/// `{base}/path`.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(normalize_base_url("http://localhost:5000/"), "http://localhost:5000");
        assert_eq!(normalize_base_url("http://localhost:5000///"), "http://localhost:5000");
    }

    #[test]
    fn test_clean_url_is_unchanged() {
        assert_eq!(normalize_base_url("https://rides.example.com"), "https://rides.example.com");
    }

    #[test]
    fn test_flag_wins_over_default() {
        let config = Config::load(Some("http://10.0.0.1:8080/".to_string()));
        assert_eq!(config.base_url, "http://10.0.0.1:8080");
    }

    #[test]
    fn test_missing_flag_uses_default() {
        let config = Config::load(None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
