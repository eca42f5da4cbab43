//! Shared utilities and common types for the announcements backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Password hashing with Argon2id
//! - JWT token generation and validation
//! - Offset-based pagination helpers
//! - Common validation logic

pub mod jwt;
pub mod pagination;
pub mod password;
pub mod validation;
