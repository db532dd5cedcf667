//! Infrastructure Layer
//!
//! reqwest-backed implementation of the transport trait.

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
