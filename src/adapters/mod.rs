//! Concrete adapter implementations for ports.

pub mod file_source;
