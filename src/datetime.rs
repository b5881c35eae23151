//! Built-in module normalizing date-time parameters.
//!
//! Registered through the regular discovery mechanism, so it also serves as
//! the reference extension module. Timestamps are encoded as RFC 3339
//! strings in UTC and plain dates as `YYYY-MM-DD`, regardless of how the
//! argument serialized by default.
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::Value;

use crate::introspector::Introspector;
use crate::module::{ClientModule, ClientModuleEntry};

pub struct DateTimeModule;

impl ClientModule for DateTimeModule {
    fn name(&self) -> &'static str {
        "datetime"
    }

    fn initialize_introspector(&self, introspector: &mut Introspector) -> anyhow::Result<()> {
        introspector.register_parameter_encoder::<DateTime<Utc>>(|name, value, params| {
            let normalized = match serde_json::from_value::<DateTime<Utc>>(value.clone()) {
                Ok(timestamp) => {
                    Value::String(timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
                }
                // not a recognizable timestamp; pass the raw value through
                Err(_) => value,
            };
            params.insert(name.to_string(), normalized);
        });

        introspector.register_parameter_encoder::<NaiveDate>(|name, value, params| {
            let normalized = match serde_json::from_value::<NaiveDate>(value.clone()) {
                Ok(date) => Value::String(date.format("%Y-%m-%d").to_string()),
                Err(_) => value,
            };
            params.insert(name.to_string(), normalized);
        });

        Ok(())
    }
}

inventory::submit! { ClientModuleEntry(&DateTimeModule) }

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::{json, Map};

    use super::*;

    #[test]
    fn test_timestamp_normalized_to_rfc3339() {
        let introspector = crate::module::initialize_with(&[&DateTimeModule]).unwrap();
        let encoder = introspector
            .parameter_encoders()
            .lookup(std::any::TypeId::of::<DateTime<Utc>>());

        let timestamp = Utc.with_ymd_and_hms(2016, 7, 2, 12, 30, 0).unwrap();
        let mut params = Map::new();
        encoder("since", serde_json::to_value(timestamp).unwrap(), &mut params);

        assert_eq!(params.get("since"), Some(&json!("2016-07-02T12:30:00Z")));
    }

    #[test]
    fn test_date_normalized_to_iso_date() {
        let introspector = crate::module::initialize_with(&[&DateTimeModule]).unwrap();
        let encoder = introspector
            .parameter_encoders()
            .lookup(std::any::TypeId::of::<NaiveDate>());

        let date = NaiveDate::from_ymd_opt(2016, 7, 2).unwrap();
        let mut params = Map::new();
        encoder("day", serde_json::to_value(date).unwrap(), &mut params);

        assert_eq!(params.get("day"), Some(&json!("2016-07-02")));
    }

    #[test]
    fn test_discovered_module_set_includes_datetime() {
        let modules = crate::module::discovered_modules();
        assert!(modules.iter().any(|module| module.name() == "datetime"));
    }
}
