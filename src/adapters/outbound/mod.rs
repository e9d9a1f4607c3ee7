mod dashmap_location_cache;
mod ip_api_com_client;
mod ipapi_co_client;
mod ipinfo_client;

pub use dashmap_location_cache::{DashMapLocationCache, DEFAULT_RETENTION};
pub use ip_api_com_client::IpApiComClient;
pub use ipapi_co_client::IpapiCoClient;
pub use ipinfo_client::IpInfoClient;
