//! Platform integration

pub mod browser;
