//! Property-based tests for tracer configuration validation.
//!
//! These tests generate random configuration documents and verify that the
//! load-time validation pass and the query methods agree with the document
//! contents, catching edge cases unit tests might miss.
//!
//! Test coverage:
//! - Validation round trip: a well-formed generated document loads into
//!   settings matching the generated values exactly.
//! - Default-deny: names absent from the generated document query as false.
//! - Structural errors: a wrong-typed `enabled` anywhere fails the load.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::json;

use tracer_config::{ConfigStore, settings_from_document};

/// Strategy for generating application names, including empty and non-ASCII.
fn application_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z][a-z0-9-]{0,20}",
        Just("διεργασία".to_string()),
        Just("web-frontend.prod".to_string()),
    ]
}

/// Strategy for generating integration names in the shape real integrations
/// use (library and protocol identifiers).
fn integration_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{1,15}",
        Just("aspnet-web-api2".to_string()),
        Just("aspnet-core-mvc2".to_string()),
        Just("sql-client".to_string()),
    ]
}

/// Strategy for generating an integrations map with 0..8 entries.
fn integrations_strategy() -> impl Strategy<Value = BTreeMap<String, bool>> {
    prop::collection::btree_map(integration_name_strategy(), any::<bool>(), 0..8)
}

fn document_json(
    application_name: &str,
    enabled: bool,
    integrations: &BTreeMap<String, bool>,
) -> serde_json::Value {
    let entries: serde_json::Map<String, serde_json::Value> = integrations
        .iter()
        .map(|(name, flag)| (name.clone(), json!({ "enabled": flag })))
        .collect();
    json!({
        "tracing": {
            "applicationName": application_name,
            "enabled": enabled,
            "integrations": entries,
        }
    })
}

proptest! {
    /// A well-formed document loads into settings that mirror it exactly.
    #[test]
    fn prop_validation_round_trip(
        application_name in application_name_strategy(),
        enabled in any::<bool>(),
        integrations in integrations_strategy(),
    ) {
        let document = document_json(&application_name, enabled, &integrations);
        let settings = settings_from_document(&document).unwrap();

        prop_assert_eq!(&settings.application_name, &application_name);
        prop_assert_eq!(settings.enabled, enabled);
        prop_assert_eq!(settings.integrations.len(), integrations.len());
        for (name, flag) in &integrations {
            prop_assert_eq!(settings.is_integration_enabled(name), *flag);
        }
    }

    /// Names absent from the document always query as disabled.
    #[test]
    fn prop_absent_integration_is_disabled(
        integrations in integrations_strategy(),
        absent in "[A-Z][A-Z0-9_]{1,12}",
    ) {
        // Generated present names are lowercase, so `absent` cannot collide.
        let document = document_json("svc", true, &integrations);
        let settings = settings_from_document(&document).unwrap();
        prop_assert!(!settings.is_integration_enabled(&absent));
    }

    /// The store's queries agree with the document for every configured name.
    #[test]
    fn prop_store_queries_match_document(
        application_name in application_name_strategy(),
        enabled in any::<bool>(),
        integrations in integrations_strategy(),
    ) {
        let document = document_json(&application_name, enabled, &integrations);
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), serde_json::to_string(&document).unwrap()).unwrap();

        let store = ConfigStore::new();
        store.load(file.path()).unwrap();

        prop_assert_eq!(store.application_name().unwrap(), application_name);
        prop_assert_eq!(store.is_tracing_enabled().unwrap(), enabled);
        for (name, flag) in &integrations {
            prop_assert_eq!(store.is_integration_enabled(name).unwrap(), *flag);
        }
    }

    /// A non-boolean `enabled` on any integration entry fails validation.
    #[test]
    fn prop_wrong_typed_integration_enabled_fails(
        integrations in integrations_strategy(),
        bad_name in "[a-z]{1,8}",
        bad_value in prop_oneof![Just(json!(1)), Just(json!("true")), Just(json!(null))],
    ) {
        let mut document = document_json("svc", true, &integrations);
        document["tracing"]["integrations"][&bad_name] = json!({ "enabled": bad_value });

        prop_assert!(settings_from_document(&document).is_err());
    }
}
