//! Entity Module

pub mod session;
