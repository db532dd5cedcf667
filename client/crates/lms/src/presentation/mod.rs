//! Presentation Layer
//!
//! Router committing guarded navigations.

pub mod router;

pub use router::{NavigationOutcome, Router};
