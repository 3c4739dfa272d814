pub mod account;
pub mod api;
pub mod id;
pub mod org;
pub mod user;
pub mod violation;
