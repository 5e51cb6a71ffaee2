//! Inbound adapters translating external requests into driving-port calls.
//!
//! HTTP is the only transport; framework details stay under [`http`].

pub mod http;
