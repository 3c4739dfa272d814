pub mod actions;
pub mod notice;
pub mod options;
pub mod session;
pub mod storage;
