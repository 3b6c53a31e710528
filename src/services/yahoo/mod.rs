pub mod messages;
pub mod provider;

pub use provider::{YahooPriceSource, DEFAULT_BASE_URL, DEFAULT_RANGE};
