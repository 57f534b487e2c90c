//! Ripple Infrastructure Layer
//!
//! DNS adapters for the application ports, built on `hickory-proto` for the
//! wire format and `hickory-resolver` for recursive lookups.
pub mod dns;
