mod authoritative_discovery;
mod target_checker;

pub use authoritative_discovery::AuthoritativeDiscovery;
pub use target_checker::TargetChecker;
