mod location_cache;
mod provider_client;

pub use location_cache::LocationCache;
pub use provider_client::{ProviderClient, ProviderError};
