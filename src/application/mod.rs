//! Application Layer
//!
//! Use cases that orchestrate the domain: per-IP resolution with request
//! coalescing, and batch refresh of devices with unknown stored locations.

pub mod batch_refresh;
pub mod resolver_service;

pub use batch_refresh::BatchRefreshOrchestrator;
pub use resolver_service::LocationResolverService;
