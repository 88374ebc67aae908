//! Field population: moves raw config strings into a typed record.
//!
//! Population is all-or-nothing. Each field is looked up and converted in
//! declaration order, stopping at the first failure; setters only run once
//! every field has converted, so a failed call leaves the target untouched.

use crate::domain::error::ConfigError;
use crate::domain::field::{FieldDescriptor, FieldSetter};
use crate::domain::raw_config::RawConfig;
use crate::ports::config_record::ConfigRecord;

/// A converted value waiting to be written.
enum Staged<T> {
    Signed(fn(&mut T, i64), i64),
    Unsigned(fn(&mut T, u64), u64),
    Text(fn(&mut T, String), String),
}

impl<T> Staged<T> {
    fn apply(self, target: &mut T) {
        match self {
            Staged::Signed(set, value) => set(target, value),
            Staged::Unsigned(set, value) => set(target, value),
            Staged::Text(set, value) => set(target, value),
        }
    }
}

fn stage<T>(field: &FieldDescriptor<T>, raw: &str) -> Result<Staged<T>, ConfigError> {
    let conversion_error = |source| ConfigError::TypeConversion {
        field: field.name.to_string(),
        kind: field.kind(),
        value: raw.to_string(),
        source,
    };
    match field.setter {
        FieldSetter::Signed(set) => raw
            .parse::<i64>()
            .map(|v| Staged::Signed(set, v))
            .map_err(conversion_error),
        FieldSetter::Unsigned(set) => raw
            .parse::<u64>()
            .map(|v| Staged::Unsigned(set, v))
            .map_err(conversion_error),
        FieldSetter::Text(set) => Ok(Staged::Text(set, raw.to_string())),
        FieldSetter::Unsupported(type_name) => Err(ConfigError::UnsupportedType {
            field: field.name.to_string(),
            type_name: type_name.to_string(),
        }),
    }
}

/// Populates `target` from `raw` using an explicit descriptor list.
pub fn populate_with<T>(
    target: &mut T,
    fields: &[FieldDescriptor<T>],
    raw: &RawConfig,
) -> Result<(), ConfigError> {
    let mut staged = Vec::with_capacity(fields.len());
    for field in fields {
        let value = raw.get(field.name).ok_or_else(|| ConfigError::MissingKey {
            key: field.name.to_string(),
        })?;
        staged.push(stage(field, value)?);
    }
    for value in staged {
        value.apply(target);
    }
    Ok(())
}

/// Populates a [`ConfigRecord`] from `raw`.
pub fn populate<T: ConfigRecord>(target: &mut T, raw: &RawConfig) -> Result<(), ConfigError> {
    populate_with(target, &T::fields(), raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::FieldKind;

    #[derive(Debug, Default, PartialEq)]
    struct Service {
        name: String,
        count: u64,
        offset: i64,
    }

    impl ConfigRecord for Service {
        fn fields() -> Vec<FieldDescriptor<Self>> {
            vec![
                FieldDescriptor::<Self>::text("Name", |s, v| s.name = v),
                FieldDescriptor::<Self>::unsigned("Count", |s, v| s.count = v),
                FieldDescriptor::<Self>::signed("Offset", |s, v| s.offset = v),
            ]
        }
    }

    fn raw(pairs: &[(&str, &str)]) -> RawConfig {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn populates_every_kind() {
        let mut svc = Service::default();
        populate(
            &mut svc,
            &raw(&[("Name", "svc"), ("Count", "42"), ("Offset", "-7")]),
        )
        .unwrap();
        assert_eq!(
            svc,
            Service {
                name: "svc".to_string(),
                count: 42,
                offset: -7,
            }
        );
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut svc = Service::default();
        populate(
            &mut svc,
            &raw(&[("Name", "a"), ("Count", "1"), ("Offset", "0"), ("Other", "x")]),
        )
        .unwrap();
        assert_eq!(svc.name, "a");
    }

    #[test]
    fn text_is_assigned_verbatim() {
        let mut svc = Service::default();
        populate(
            &mut svc,
            &raw(&[("Name", "  spaced  # kept"), ("Count", "0"), ("Offset", "0")]),
        )
        .unwrap();
        assert_eq!(svc.name, "  spaced  # kept");
    }

    #[test]
    fn first_missing_key_is_reported() {
        let mut svc = Service::default();
        let err = populate(&mut svc, &raw(&[("Name", "svc")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { ref key } if key == "Count"));
    }

    #[test]
    fn non_numeric_unsigned_fails() {
        let mut svc = Service::default();
        let err = populate(
            &mut svc,
            &raw(&[("Name", "svc"), ("Count", "abc"), ("Offset", "0")]),
        )
        .unwrap_err();
        match err {
            ConfigError::TypeConversion {
                field, kind, value, ..
            } => {
                assert_eq!(field, "Count");
                assert_eq!(kind, FieldKind::UnsignedInteger);
                assert_eq!(value, "abc");
            }
            other => panic!("expected TypeConversion, got {other:?}"),
        }
    }

    #[test]
    fn negative_unsigned_fails() {
        let mut svc = Service::default();
        let err = populate(
            &mut svc,
            &raw(&[("Name", "svc"), ("Count", "-1"), ("Offset", "0")]),
        )
        .unwrap_err();
        assert_eq!(err.key(), Some("Count"));
        assert!(matches!(err, ConfigError::TypeConversion { .. }));
    }

    #[test]
    fn signed_overflow_fails() {
        let mut svc = Service::default();
        let err = populate(
            &mut svc,
            &raw(&[
                ("Name", "svc"),
                ("Count", "1"),
                ("Offset", "9223372036854775808"),
            ]),
        )
        .unwrap_err();
        assert_eq!(err.key(), Some("Offset"));
    }

    #[test]
    fn integer_bounds_accepted() {
        let mut svc = Service::default();
        populate(
            &mut svc,
            &raw(&[
                ("Name", ""),
                ("Count", "18446744073709551615"),
                ("Offset", "-9223372036854775808"),
            ]),
        )
        .unwrap();
        assert_eq!(svc.count, u64::MAX);
        assert_eq!(svc.offset, i64::MIN);
    }

    #[test]
    fn failure_leaves_target_untouched() {
        let mut svc = Service {
            name: "before".to_string(),
            count: 9,
            offset: 3,
        };
        let result = populate(
            &mut svc,
            &raw(&[("Name", "after"), ("Count", "10"), ("Offset", "x")]),
        );
        assert!(result.is_err());
        assert_eq!(svc.name, "before");
        assert_eq!(svc.count, 9);
    }

    #[test]
    fn unsupported_type_names_field_and_type() {
        let fields = [
            FieldDescriptor::<Service>::text("Name", |s, v| s.name = v),
            FieldDescriptor::<Service>::unsupported("Ratio", "f64"),
        ];
        let mut svc = Service::default();
        let err = populate_with(&mut svc, &fields, &raw(&[("Name", "a"), ("Ratio", "0.5")]))
            .unwrap_err();
        match err {
            ConfigError::UnsupportedType { field, type_name } => {
                assert_eq!(field, "Ratio");
                assert_eq!(type_name, "f64");
            }
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
        assert_eq!(svc.name, "");
    }

    #[test]
    fn missing_checked_before_type() {
        let fields = [FieldDescriptor::<Service>::unsupported("Ratio", "f64")];
        let mut svc = Service::default();
        let err = populate_with(&mut svc, &fields, &RawConfig::new()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { .. }));
    }

    #[test]
    fn key_match_is_case_sensitive() {
        let mut svc = Service::default();
        let err = populate(
            &mut svc,
            &raw(&[("name", "svc"), ("Count", "1"), ("Offset", "0")]),
        )
        .unwrap_err();
        assert_eq!(err.key(), Some("Name"));
    }

    #[test]
    fn empty_descriptor_list_succeeds() {
        let mut svc = Service::default();
        populate_with(&mut svc, &[], &RawConfig::new()).unwrap();
        assert_eq!(svc, Service::default());
    }
}
