//! CLI command implementations.

mod analytics;
mod config_gen;
mod recent;
mod shorten;

pub use analytics::show_analytics;
pub use config_gen::generate_config;
pub use recent::list_recent;
pub use shorten::shorten_url;
