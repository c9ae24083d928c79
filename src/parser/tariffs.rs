use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::tariff::Tariff;

/// One record as found in the document. The five known fields are kept
/// as loose JSON values so string/number mixes coerce uniformly; a key
/// missing from the object is Null. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawTariff {
    #[serde(rename = "type", default)]
    kind: Value,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    fee: Value,
    #[serde(default)]
    clients: Value,
    #[serde(default)]
    param: Value,
}

/// Read a tariff file and build a catalog from it.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = extract(&text)?;
    info!("Loaded {} tariffs from {}", catalog.count(), path.display());
    Ok(catalog)
}

/// Parse a JSON array of flat tariff objects. Records with an unknown
/// type are skipped; a value that fails to coerce aborts the whole
/// extraction, so the caller never sees a partial catalog.
pub fn extract(text: &str) -> Result<Catalog, CatalogError> {
    let records: Vec<RawTariff> =
        serde_json::from_str(text).map_err(|e| CatalogError::MalformedRecord(e.to_string()))?;

    let mut catalog = Catalog::new();
    for record in records {
        let kind = string_field(&record.kind);
        let name = string_field(&record.name);
        let fee = f64_field(&record.fee, "fee")?;
        let clients = u32_field(&record.clients, "clients")?;
        let param = u32_field(&record.param, "param")?;

        match Tariff::from_fields(&kind, name, fee, clients, param) {
            Some(tariff) => catalog.append(tariff),
            None => debug!("Skipping record with unknown type {:?}", kind),
        }
    }
    Ok(catalog)
}

// Missing keys default to "0" rather than failing; only values that are
// present but not coercible count as malformed.

fn string_field(value: &Value) -> String {
    match value {
        Value::Null => "0".to_string(),
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

fn f64_field(value: &Value, key: &str) -> Result<f64, CatalogError> {
    match value {
        Value::Null => Ok(0.0),
        Value::Number(n) => n.as_f64().ok_or_else(|| malformed(key, value)),
        Value::String(s) => s.trim().parse().map_err(|_| malformed(key, value)),
        _ => Err(malformed(key, value)),
    }
}

fn u32_field(value: &Value, key: &str) -> Result<u32, CatalogError> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| malformed(key, value)),
        Value::String(s) => s.trim().parse().map_err(|_| malformed(key, value)),
        _ => Err(malformed(key, value)),
    }
}

fn malformed(key: &str, value: &Value) -> CatalogError {
    CatalogError::MalformedRecord(format!("field {:?} has unusable value {}", key, value))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::TariffKind;

    #[test]
    fn one_record_per_category() {
        let catalog = extract(
            r#"[
                {"type": "basic", "name": "A", "fee": 100, "clients": 10, "param": 300},
                {"type": "internet", "name": "B", "fee": 200, "clients": 20, "param": 50},
                {"type": "premium", "name": "C", "fee": 300, "clients": 30, "param": 1}
            ]"#,
        )
        .unwrap();
        let kinds: Vec<_> = catalog.iter().map(|t| t.kind().clone()).collect();
        assert_eq!(
            kinds,
            [
                TariffKind::Basic { minutes: 300 },
                TariffKind::Internet { gigabytes: 50 },
                TariffKind::Premium { roaming: true },
            ]
        );
    }

    #[test]
    fn count_sum_and_filter_scenario() {
        let catalog = extract(
            r#"[
                {"type": "basic", "name": "T1", "fee": 100, "clients": 10, "param": 10},
                {"type": "internet", "name": "T2", "fee": 200, "clients": 20, "param": 20}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.count(), 2);
        assert_eq!(catalog.total_clients(), 30);
        let hits = catalog.filter_by_fee(150.0, 250.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "T2");
    }

    #[test]
    fn string_and_number_values_mix() {
        let catalog = extract(
            r#"[{"type": "basic", "name": "T", "fee": "250.5", "clients": "640", "param": 500}]"#,
        )
        .unwrap();
        let t = catalog.iter().next().unwrap();
        assert_eq!(t.monthly_fee(), 250.5);
        assert_eq!(t.clients(), 640);
    }

    #[test]
    fn unknown_type_is_silently_skipped() {
        let catalog = extract(
            r#"[
                {"type": "gold", "name": "Nope", "fee": 999, "clients": 1, "param": 1},
                {"type": "basic", "name": "Kept", "fee": 100, "clients": 10, "param": 10}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.count(), 1);
        assert_eq!(catalog.iter().next().unwrap().name(), "Kept");
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let catalog = extract(r#"[{"type": "basic", "name": "Bare"}]"#).unwrap();
        let t = catalog.iter().next().unwrap();
        assert_eq!(t.monthly_fee(), 0.0);
        assert_eq!(t.clients(), 0);
        assert_eq!(t.kind(), &TariffKind::Basic { minutes: 0 });
    }

    #[test]
    fn missing_type_defaults_and_skips() {
        // The defaulted "0" is not a known category, so the record is dropped
        let catalog = extract(r#"[{"name": "Typeless", "fee": 100}]"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn non_numeric_fee_aborts() {
        let err = extract(r#"[{"type": "basic", "name": "Bad", "fee": "abc"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord(_)));
    }

    #[test]
    fn negative_clients_abort() {
        let err =
            extract(r#"[{"type": "basic", "name": "Bad", "fee": 100, "clients": -5}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord(_)));
    }

    #[test]
    fn failure_yields_no_partial_catalog() {
        // First record is fine, second is malformed: the whole call fails
        let result = extract(
            r#"[
                {"type": "basic", "name": "Ok", "fee": 100, "clients": 10, "param": 10},
                {"type": "basic", "name": "Bad", "fee": "oops", "clients": 10, "param": 10}
            ]"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn top_level_must_be_an_array() {
        assert!(matches!(
            extract(r#"{"type": "basic"}"#),
            Err(CatalogError::MalformedRecord(_))
        ));
    }

    #[test]
    fn missing_file_is_source_unreadable() {
        let err = load(Path::new("tests/fixtures/no_such_file.json")).unwrap_err();
        assert!(matches!(err, CatalogError::SourceUnreadable { .. }));
    }

    #[test]
    fn tariffs_fixture() {
        let catalog = load(Path::new("tests/fixtures/tariffs.json")).unwrap();
        assert_eq!(catalog.count(), 4);
        assert_eq!(catalog.total_clients(), 2850);
        let hits = catalog.filter_by_fee(300.0, 700.0);
        let names: Vec<_> = hits.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["Net Unlim", "Elite Plus"]);
    }
}
