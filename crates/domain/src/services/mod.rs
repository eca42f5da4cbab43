//! Business logic services.

pub mod stats;
pub mod targeting;
