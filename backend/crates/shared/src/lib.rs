//! Shared Kernel - Crate-crossing minimal core
//!
//! This crate contains the "smallest core" of client vocabulary:
//! - Common error types and result aliases
//! - Typed record IDs
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the auth and attendance crates.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod id;
