//! Shared Kernel - Vocabulary shared by every client crate
//!
//! This crate contains the "smallest core" of the LMS client:
//! - The unified error type surfaced to views
//! - Error classification by HTTP status or transport failure
//! - Typed numeric IDs for backend records
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all layers.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
