//! Infrastructure Layer
//!
//! HTTP gateway and host device adapters.

pub mod devices;
pub mod dto;
pub mod http;

pub use devices::{FileCamera, FixedGeolocation};
pub use http::HttpAttendanceGateway;
