//! Presentation Layer
//!
//! View models driven by the client surface.

pub mod capture_view;
pub mod navigation;

pub use capture_view::CaptureView;
pub use navigation::Navigator;
