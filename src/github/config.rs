use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Wall-clock budget for a whole round trip, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Page size asked for by list calls. Only the first page is ever fetched.
pub const DEFAULT_PER_PAGE: u32 = 1000;

#[derive(PartialEq, Clone, Debug)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub per_page: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.parse().expect("default API URL should be valid"),
            timeout: DEFAULT_TIMEOUT,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[cfg(test)]
#[test]
fn test_default_client_config() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url.as_str(), "https://api.github.com/");
    assert_eq!(cfg.timeout, Duration::from_secs(5));
    assert_eq!(cfg.per_page, 1000);
}
