//! Domain layer for the announcements backend.
//!
//! This crate contains:
//! - Domain models (User, Role, Department, Announcement, ReadReceipt)
//! - Targeting resolution and read-statistics services
//! - Request/response types shared with the API layer

pub mod models;
pub mod services;
