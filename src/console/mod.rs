//! Reusable console patterns shared by every screen.
//!
//! - [`wizard`] drives step-wise forms with per-step validation gating.
//! - [`filter`] and [`index`] narrow fetched collections with composable predicates.
//! - [`list`] owns a fetched collection and applies confirmed mutations to it.
//! - [`directory`] holds the organisational lookup tables.
//! - [`guard`] and [`session`] decide what may render for the current operator.
//! - [`scope`] ties in-flight requests to the lifetime of the view that issued them.

pub mod directory;
pub mod filter;
pub mod form;
pub mod guard;
pub mod index;
pub mod list;
pub mod scope;
pub mod session;
pub mod wizard;
