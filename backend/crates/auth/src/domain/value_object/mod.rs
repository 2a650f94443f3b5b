//! Value Object Module

pub mod credentials;
pub mod employee_id;
