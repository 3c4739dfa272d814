//! Factory functions for in-memory model instances with standard test values.

pub mod account;
pub mod org;
pub mod user;
