//! Typed config record port trait.

use crate::domain::field::FieldDescriptor;

/// A record populated from config. Every listed field is required and is
/// filled from the config key equal to its descriptor name.
///
/// Usually implemented with [`config_record!`](crate::config_record).
pub trait ConfigRecord: Sized {
    fn fields() -> Vec<FieldDescriptor<Self>>;
}
