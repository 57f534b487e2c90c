//! Ripple Application Layer
//!
//! Ports implemented by the infrastructure crate and the propagation poller
//! that drives them.
pub mod events;
pub mod ports;
pub mod use_cases;
