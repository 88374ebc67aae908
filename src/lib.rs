//! kvconf — read `key = value` config files into maps or typed records.
//!
//! Hexagonal layout: parsing and population in [`domain`], port traits in
//! [`ports`], the filesystem implementation in [`adapters`].
//!
//! ```no_run
//! use kvconf::{config_record, populate_config_struct};
//!
//! #[derive(Default)]
//! struct Service {
//!     name: String,
//!     workers: u64,
//! }
//!
//! config_record!(Service {
//!     name: text => "Name",
//!     workers: unsigned => "Workers",
//! });
//!
//! let mut service = Service::default();
//! populate_config_struct("/etc/service.conf", &mut service)?;
//! # Ok::<(), kvconf::ConfigError>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;

use std::path::Path;

use adapters::file_source::FileSource;
use domain::raw_config;
use ports::source_port::SourcePort;

pub use domain::error::ConfigError;
pub use domain::field::{FieldDescriptor, FieldKind, FieldSetter};
pub use domain::populate::{populate, populate_with};
pub use domain::raw_config::RawConfig;
pub use ports::config_record::ConfigRecord;

/// Reads the config file at `path` through `source`.
///
/// A blank path fails with `InvalidPath` before `source` is consulted.
pub fn read_raw_config_from<P: AsRef<Path>>(
    source: &dyn SourcePort,
    path: P,
) -> Result<RawConfig, ConfigError> {
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(ConfigError::InvalidPath {
            path: path.to_path_buf(),
        });
    }
    let reader = source.open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    raw_config::parse_reader(reader, path)
}

/// Reads the config file at `path` into an untyped map.
pub fn read_raw_config<P: AsRef<Path>>(path: P) -> Result<RawConfig, ConfigError> {
    read_raw_config_from(&FileSource, path)
}

/// Reads the config file at `path` and checks every key in `required` is
/// present, reporting the first absent one.
pub fn read_config_with_required_keys<P, S>(
    path: P,
    required: &[S],
) -> Result<RawConfig, ConfigError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let config = read_raw_config(path)?;
    raw_config::require_keys(&config, required)?;
    Ok(config)
}

/// Reads the config file at `path` and populates `target` from it.
/// On error `target` is left unchanged.
pub fn populate_config_struct<P, T>(path: P, target: &mut T) -> Result<(), ConfigError>
where
    P: AsRef<Path>,
    T: ConfigRecord,
{
    let config = read_raw_config(path)?;
    populate(target, &config)
}

/// Implements [`ConfigRecord`] for a struct from a list of its fields.
///
/// Each entry is `field: kind` or `field: kind => "Key"`, where `kind` is
/// `signed` (`i64`), `unsigned` (`u64`) or `text` (`String`). Without an
/// explicit key the field identifier is used.
#[macro_export]
macro_rules! config_record {
    (@key $field:ident) => {
        stringify!($field)
    };
    (@key $field:ident $key:literal) => {
        $key
    };
    (@field $record:ty, signed, $field:ident, $key:expr) => {
        $crate::FieldDescriptor::<$record>::signed($key, |record, value| record.$field = value)
    };
    (@field $record:ty, unsigned, $field:ident, $key:expr) => {
        $crate::FieldDescriptor::<$record>::unsigned($key, |record, value| record.$field = value)
    };
    (@field $record:ty, text, $field:ident, $key:expr) => {
        $crate::FieldDescriptor::<$record>::text($key, |record, value| record.$field = value)
    };
    ($record:ty { $($field:ident : $kind:ident $(=> $key:literal)?),* $(,)? }) => {
        impl $crate::ConfigRecord for $record {
            fn fields() -> ::std::vec::Vec<$crate::FieldDescriptor<Self>> {
                ::std::vec![
                    $($crate::config_record!(
                        @field $record,
                        $kind,
                        $field,
                        $crate::config_record!(@key $field $($key)?)
                    )),*
                ]
            }
        }
    };
}
