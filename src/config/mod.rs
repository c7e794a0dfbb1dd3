//! Configuration module

mod site;

pub use site::AssetMapping;
pub use site::SiteConfig;
