pub mod builders;
pub mod dns_server_mock;
pub mod scripted;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use dns_server_mock::{MockDnsServer, MockReply, Via};
#[allow(unused_imports)]
pub use scripted::{CountingLookup, ScriptedExchange};
