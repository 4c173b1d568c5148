//! 저장된 레코드를 보고서 스키마에 넣기 전의 정리 단계.
//!
//! 동기화 API는 `{ report_data: {...} }`, 로컬 DB는 `{ data: {...} }` 형태로 돌려주고,
//! 일부 양식은 머리말을 `report_info` 안에 한 번 더 저장한다. 여기서 이 껍데기를
//! 벗기고 옛 키 이름을 현재 이름으로 바꾼다.

use serde_json::{Map, Value};

/// 안쪽 내용을 바깥으로 합치는 껍데기 키. 앞쪽이 우선한다.
pub const ENVELOPE_KEYS: [&str; 3] = ["report_data", "data", "report_info"];

/// 모든 보고서 머리말에 공통인 옛 키 → 현재 키.
pub const HEADER_ALIASES: &[(&str, &str)] = &[
    ("customerName", "customer"),
    ("customer_name", "customer"),
    ("customerLocation", "address"),
    ("customerAddress", "address"),
    ("siteAddress", "address"),
    ("site_address", "address"),
    ("userName", "user"),
    ("user_name", "user"),
    ("testedBy", "user"),
    ("testDate", "date"),
    ("job_number", "jobNumber"),
    ("eqpt_location", "eqptLocation"),
    ("equipmentLocation", "eqptLocation"),
    ("location", "substation"),
];

/// `temperature` 묶음 안의 옛 키 → 현재 키. 건식 변압기 양식은 두 이름을 함께 저장한다.
pub const TEMPERATURE_ALIASES: &[(&str, &str)] = &[
    ("ambient", "fahrenheit"),
    ("correctionFactor", "tcf"),
    ("correction_factor", "tcf"),
];

/// null이나 빈 문자열은 값이 없는 것으로 본다.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// 이미 채워진 키는 건드리지 않는다.
fn merge_missing(out: &mut Map<String, Value>, key: String, value: Value) {
    match out.get(&key) {
        Some(existing) if !is_blank(existing) => {}
        _ => {
            out.insert(key, value);
        }
    }
}

/// 껍데기를 재귀적으로 벗겨 한 단계 맵으로 만든다. 바깥 값이 안쪽 값보다 우선한다.
pub fn flatten_envelopes(map: &Map<String, Value>) -> Map<String, Value> {
    let mut out: Map<String, Value> = map
        .iter()
        .filter(|(k, _)| !ENVELOPE_KEYS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    for key in ENVELOPE_KEYS {
        if let Some(Value::Object(inner)) = map.get(key) {
            for (k, v) in flatten_envelopes(inner) {
                merge_missing(&mut out, k, v);
            }
        }
    }
    out
}

/// 옛 키를 현재 키로 옮긴다. 현재 키에 값이 있으면 옛 키의 값은 버린다.
pub fn apply_aliases(map: &mut Map<String, Value>, aliases: &[(&str, &str)]) {
    for (alias, canonical) in aliases {
        if let Some(value) = map.remove(*alias) {
            merge_missing(map, (*canonical).to_string(), value);
        }
    }
}

/// 보고서 스키마가 읽을 수 있는 평평한 객체를 만든다.
///
/// 입력이 객체가 아니면 `None`.
pub fn normalize(value: &Value, aliases: &[(&str, &str)]) -> Option<Value> {
    let Value::Object(map) = value else {
        return None;
    };
    let mut flat = flatten_envelopes(map);
    apply_aliases(&mut flat, HEADER_ALIASES);
    apply_aliases(&mut flat, aliases);
    if let Some(Value::Object(temperature)) = flat.get_mut("temperature") {
        apply_aliases(temperature, TEMPERATURE_ALIASES);
    }
    Some(Value::Object(flat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelopes_merge_under_top_level() {
        let raw = json!({
            "comments": "top",
            "report_info": { "customer": "ACME", "comments": "inner" },
            "data": { "identifier": "TX-1", "report_data": { "technicians": "JS" } }
        });
        let v = normalize(&raw, &[]).unwrap();
        assert_eq!(v["comments"], "top");
        assert_eq!(v["customer"], "ACME");
        assert_eq!(v["identifier"], "TX-1");
        assert_eq!(v["technicians"], "JS");
        assert!(v.get("report_info").is_none());
    }

    #[test]
    fn blank_top_level_value_yields_to_envelope() {
        let raw = json!({ "customer": "", "report_info": { "customer": "ACME" } });
        let v = normalize(&raw, &[]).unwrap();
        assert_eq!(v["customer"], "ACME");
    }

    #[test]
    fn legacy_names_are_renamed_once() {
        let raw = json!({ "customerName": "Old", "customer": "New", "job_number": "J-9" });
        let v = normalize(&raw, &[]).unwrap();
        assert_eq!(v["customer"], "New");
        assert_eq!(v["jobNumber"], "J-9");
        assert!(v.get("customerName").is_none());
    }

    #[test]
    fn temperature_keeps_canonical_key_over_legacy_copy() {
        let raw = json!({
            "temperature": { "ambient": 70, "fahrenheit": 86, "correctionFactor": 1.316, "humidity": 40 }
        });
        let v = normalize(&raw, &[]).unwrap();
        assert_eq!(v["temperature"], json!({ "fahrenheit": 86, "tcf": 1.316, "humidity": 40 }));

        let raw = json!({ "temperature": { "ambient": 77, "fahrenheit": "" } });
        let v = normalize(&raw, &[]).unwrap();
        assert_eq!(v["temperature"]["fahrenheit"], 77);
    }

    #[test]
    fn non_object_input_is_rejected() {
        assert!(normalize(&json!("nope"), &[]).is_none());
        assert!(normalize(&json!([1, 2]), &[]).is_none());
    }
}
