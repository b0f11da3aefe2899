//! End-to-end drills over decoded JSON and YAML documents.

use databreeze::{
    drill, drill_field, drill_many, drill_many_or_absent, drill_one, drill_one_or_absent, Batch,
    DrillConfig, Drilled, Driller, KeyPath, Node,
};
use serde_json::{json, Value};

const PEOPLE_JSON: &str = r#"[
    {"name": "Tony", "contact": {"phone": 878787878, "city": "Madrid"}},
    {"name": "Marta", "contact": {"city": "Madrid"}},
    {"name": "Lucia", "contact": {"phone": 600100200, "city": "Sevilla"}, "tags": ["vip", "new"]},
    {"name": "Pablo", "contact": "unknown"}
]"#;

fn people() -> Vec<Value> {
    serde_json::from_str(PEOPLE_JSON).unwrap()
}

#[test]
fn tony_and_marta() {
    let tony = json!({"name": "Tony", "contact": {"phone": 878787878, "city": "Madrid"}});
    let marta = json!({"name": "Marta", "contact": {"city": "Madrid"}});

    assert_eq!(drill_one_or_absent(&tony, ["contact", "phone"]), &json!(878787878));
    assert_eq!(drill_one_or_absent(&tony, ["name"]), &json!("Tony"));
    assert_eq!(drill_one_or_absent(&marta, ["contact", "phone"]), &Value::Null);

    let missing = json!("Missing Data");
    let batch = [tony, marta];
    assert_eq!(
        drill_many(&batch, ["contact", "phone"], &missing),
        vec![&json!(878787878), &missing]
    );
}

#[test]
fn normalizing_a_decoded_batch() {
    let records = people();
    let phones = drill_many_or_absent(&records, KeyPath::parse("contact.phone").unwrap());
    assert_eq!(
        phones,
        vec![&json!(878787878), &Value::Null, &json!(600100200), &Value::Null]
    );

    let dash = json!("-");
    let cities: Vec<&str> = drill_many(&records, ["contact", "city"], &dash)
        .into_iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(cities, ["Madrid", "Madrid", "Sevilla", "-"]);
}

#[test]
fn indexing_into_nested_lists() {
    let records = people();
    let first_tag = KeyPath::parse("tags[0]").unwrap();
    let last_tag = KeyPath::parse("tags[-1]").unwrap();

    let firsts = drill_many_or_absent(&records, &first_tag);
    assert_eq!(firsts[2], &json!("vip"));
    assert!(firsts.iter().enumerate().all(|(i, v)| i == 2 || v.is_null()));

    assert_eq!(drill_one_or_absent(&records[2], &last_tag), &json!("new"));
}

#[test]
fn single_document_keeps_scalar_shape() {
    let fallback = json!("Missing Data");

    let document: Value = serde_json::from_str(PEOPLE_JSON).unwrap();
    let many = drill(Batch::from_document(&document), "name", &fallback);
    assert_eq!(many.len(), 4);

    let single: Value = serde_json::from_str(r#"{"name": "Tony"}"#).unwrap();
    assert_eq!(
        drill(Batch::from_document(&single), "name", &fallback),
        Drilled::One(&json!("Tony"))
    );
    assert_eq!(
        drill_many(Batch::from_document(&single).records(), "name", &fallback),
        vec![&json!("Tony")]
    );
}

#[test]
fn single_key_lookup_over_batch() {
    let records = people();
    let contacts = drill_field(&records, "contact", Value::absent());
    assert_eq!(contacts[3], &json!("unknown"));
    assert_eq!(drill_field(&records, "email", &json!(false)), vec![&json!(false); 4]);
}

#[test]
fn yaml_records_with_integer_keys() {
    let docs: Vec<serde_yaml::Value> = serde_yaml::from_str(
        "- {1: {2: alpha}, 3: beta}\n- {1: {4: gamma}}\n- {3: delta}\n",
    )
    .unwrap();
    let fallback = serde_yaml::Value::from("none");

    let values: Vec<&str> = drill_many(&docs, [1, 2], &fallback)
        .into_iter()
        .filter_map(serde_yaml::Value::as_str)
        .collect();
    assert_eq!(values, ["alpha", "none", "none"]);

    assert_eq!(
        drill_one(&docs[2], 3, &fallback).as_str(),
        Some("delta")
    );
}

#[test]
fn configured_driller_from_toml() {
    let config = DrillConfig::from_toml("negative_indices = false\ntrace_batches = false").unwrap();
    let driller = Driller::new(config);
    let records = people();

    let last_tags = driller.drill_many_or_absent(&records, KeyPath::parse("tags[-1]").unwrap());
    assert!(last_tags.iter().all(|v| v.is_null()));

    let (_, stats) = driller.drill_many_with_stats(&records, ["contact", "phone"], Value::absent());
    assert_eq!((stats.resolved, stats.fell_back), (2, 2));
}
