use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Cache settings
    pub cache_ttl_secs: u64,

    // Provider settings
    pub request_timeout_secs: u64,
    pub ipapi_co_base_url: String,
    pub ip_api_com_base_url: String,
    pub ipinfo_base_url: String,

    pub debug: bool,
}

impl Config {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 86400,
            request_timeout_secs: 10,
            ipapi_co_base_url: "https://ipapi.co".to_string(),
            ip_api_com_base_url: "http://ip-api.com".to_string(),
            ipinfo_base_url: "https://ipinfo.io".to_string(),
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let cache_ttl_secs = std::env::var("GEOLOC_CACHE_TTL_SECS")
        .unwrap_or_else(|_| "86400".to_string())
        .parse()
        .unwrap_or(86400);

    let request_timeout_secs = std::env::var("GEOLOC_REQUEST_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .unwrap_or(10);

    let ipapi_co_base_url = std::env::var("GEOLOC_IPAPI_CO_URL")
        .unwrap_or_else(|_| "https://ipapi.co".to_string());

    let ip_api_com_base_url = std::env::var("GEOLOC_IP_API_COM_URL")
        .unwrap_or_else(|_| "http://ip-api.com".to_string());

    let ipinfo_base_url = std::env::var("GEOLOC_IPINFO_URL")
        .unwrap_or_else(|_| "https://ipinfo.io".to_string());

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        cache_ttl_secs,
        request_timeout_secs,
        ipapi_co_base_url,
        ip_api_com_base_url,
        ipinfo_base_url,
        debug,
    })
}
