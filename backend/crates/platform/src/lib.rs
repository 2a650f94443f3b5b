//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Encoding utilities (Base64, `data:` URLs)
//! - ERP HTTP client plumbing and error-body parsing
//! - Durable key-value storage (`localStorage` equivalent)
//! - Bounded retry policy
//! - Secret strings (zeroized on drop)
//! - Environment configuration helpers

pub mod client;
pub mod config;
pub mod crypto;
pub mod retry;
pub mod secret;
pub mod storage;
