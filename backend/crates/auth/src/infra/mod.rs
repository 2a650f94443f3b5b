//! Infrastructure Layer
//!
//! HTTP and local-storage implementations of the domain ports.

pub mod dto;
pub mod http;
pub mod kv;

pub use http::HttpAuthService;
pub use kv::KvSessionRepository;
