//! Port traits: where the crate meets the filesystem and caller records.

pub mod config_record;
pub mod source_port;
