//! Core parsing and population logic.

pub mod error;
pub mod field;
pub mod populate;
pub mod raw_config;
