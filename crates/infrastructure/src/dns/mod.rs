pub mod checker;
pub mod exchange;
pub mod forwarding;
pub mod lookup;
pub mod matcher;
pub mod referral;
pub mod transport;

pub use checker::HickoryTargetChecker;
pub use exchange::{DnsExchange, WireExchange};
pub use lookup::{AddressLookup, SystemAddressLookup};
pub use matcher::RecordMatcher;
pub use referral::ReferralWalker;
