//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the LMS client:
//! - Persisted key-value storage (in-memory and file-backed)
//! - Build mode detection (development vs. production diagnostics)
//! - Request header construction (JSON defaults, bearer authorization)

pub mod build_mode;
pub mod headers;
pub mod storage;
