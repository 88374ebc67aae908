//! Field descriptors: the explicit (name, type, setter) list a record
//! exposes so it can be populated without runtime reflection.

use std::fmt;

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    SignedInteger,
    UnsignedInteger,
    Text,
    /// A type outside the supported set, carried by name for error reporting.
    Other(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::SignedInteger => f.write_str("signed-integer"),
            FieldKind::UnsignedInteger => f.write_str("unsigned-integer"),
            FieldKind::Text => f.write_str("text"),
            FieldKind::Other(name) => f.write_str(name),
        }
    }
}

/// Writes a converted value into a record of type `T`.
pub enum FieldSetter<T> {
    Signed(fn(&mut T, i64)),
    Unsigned(fn(&mut T, u64)),
    Text(fn(&mut T, String)),
    Unsupported(&'static str),
}

impl<T> Clone for FieldSetter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldSetter<T> {}

impl<T> FieldSetter<T> {
    pub fn kind(&self) -> FieldKind {
        match *self {
            FieldSetter::Signed(_) => FieldKind::SignedInteger,
            FieldSetter::Unsigned(_) => FieldKind::UnsignedInteger,
            FieldSetter::Text(_) => FieldKind::Text,
            FieldSetter::Unsupported(name) => FieldKind::Other(name),
        }
    }
}

/// One required field of a record: the config key it is read from and how
/// to store the converted value. Keys match case-sensitively.
pub struct FieldDescriptor<T> {
    pub name: &'static str,
    pub setter: FieldSetter<T>,
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

impl<T> FieldDescriptor<T> {
    pub fn signed(name: &'static str, setter: fn(&mut T, i64)) -> Self {
        Self {
            name,
            setter: FieldSetter::Signed(setter),
        }
    }

    pub fn unsigned(name: &'static str, setter: fn(&mut T, u64)) -> Self {
        Self {
            name,
            setter: FieldSetter::Unsigned(setter),
        }
    }

    pub fn text(name: &'static str, setter: fn(&mut T, String)) -> Self {
        Self {
            name,
            setter: FieldSetter::Text(setter),
        }
    }

    /// Declares a field whose type cannot be populated. Reaching it during
    /// population fails with `UnsupportedType`.
    pub fn unsupported(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            setter: FieldSetter::Unsupported(type_name),
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.setter.kind()
    }
}
