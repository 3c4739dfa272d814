//! Netroster: administrative console for institutional internet accounts.
//!
//! The library holds everything that does not need a browser: the typed model, the
//! backend contract, and the reusable console patterns (form wizard, list filtering,
//! navigation guards, session context). The Dioxus front end in the binary renders
//! them.

pub mod api;
pub mod config;
pub mod console;
pub mod error;
pub mod model;

pub use error::Error;
