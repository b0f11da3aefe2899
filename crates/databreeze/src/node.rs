//! The one-step indexing seam that drilling is built on.

use databreeze_core::types::{resolve_index, Key};

/// A record that can be indexed one key at a time.
///
/// `child_with` is the whole failure policy: every reason a step cannot be
/// taken (missing key, wrong container kind, out-of-range index, scalar
/// cursor) is `None`.
pub trait Node: Sized + 'static {
    /// Index `self` by `key`, or `None` if that is not possible.
    /// `negative_indices` only governs sequence positions; mapping keys are
    /// always looked up literally.
    fn child_with(&self, key: &Key, negative_indices: bool) -> Option<&Self>;

    /// [`child_with`](Self::child_with) with negative sequence indices allowed.
    fn child(&self, key: &Key) -> Option<&Self> {
        self.child_with(key, true)
    }

    /// View `self` as a sequence of records, if it is one.
    fn as_records(&self) -> Option<&[Self]>;

    /// The marker returned when no fallback is supplied.
    fn absent() -> &'static Self;
}

/// JSON objects are keyed by string, so an `Index` never matches an object
/// entry; it only indexes arrays.
impl Node for serde_json::Value {
    fn child_with(&self, key: &Key, negative_indices: bool) -> Option<&Self> {
        use serde_json::Value;

        match (self, key) {
            (Value::Object(map), Key::Field(name)) => map.get(name),
            (Value::Array(items), Key::Index(index)) => {
                items.get(resolve_index(*index, items.len(), negative_indices)?)
            }
            _ => None,
        }
    }

    fn as_records(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }

    fn absent() -> &'static Self {
        static NULL: serde_json::Value = serde_json::Value::Null;
        &NULL
    }
}

/// YAML mappings may be keyed by integers, so an `Index` also looks up an
/// integer mapping key. Tags are transparent.
impl Node for serde_yaml::Value {
    fn child_with(&self, key: &Key, negative_indices: bool) -> Option<&Self> {
        use serde_yaml::Value;

        match (self, key) {
            (Value::Mapping(map), Key::Field(name)) => map.get(name.as_str()),
            (Value::Mapping(map), Key::Index(index)) => map.get(&Value::Number((*index).into())),
            (Value::Sequence(items), Key::Index(index)) => {
                items.get(resolve_index(*index, items.len(), negative_indices)?)
            }
            (Value::Tagged(tagged), _) => tagged.value.child_with(key, negative_indices),
            _ => None,
        }
    }

    fn as_records(&self) -> Option<&[Self]> {
        match self {
            serde_yaml::Value::Sequence(items) => Some(items.as_slice()),
            serde_yaml::Value::Tagged(tagged) => tagged.value.as_records(),
            _ => None,
        }
    }

    fn absent() -> &'static Self {
        static NULL: serde_yaml::Value = serde_yaml::Value::Null;
        &NULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_field_and_index() {
        let doc = json!({"items": [10, 20, 30]});
        let items = doc.child(&Key::from("items")).unwrap();
        assert_eq!(items.child(&Key::from(1)), Some(&json!(20)));
        assert_eq!(items.child(&Key::from(-1)), Some(&json!(30)));
        assert_eq!(items.child(&Key::from(3)), None);
    }

    #[test]
    fn test_json_kind_mismatch_is_none() {
        let doc = json!({"1": "one", "list": [1]});
        assert_eq!(doc.child(&Key::from(1)), None);
        assert_eq!(doc.child(&Key::from("list")).unwrap().child(&Key::from("0")), None);
        assert_eq!(json!("scalar").child(&Key::from("x")), None);
        assert_eq!(json!(null).child(&Key::from(0)), None);
    }

    #[test]
    fn test_json_as_records() {
        assert_eq!(json!([1, 2]).as_records().map(<[_]>::len), Some(2));
        assert!(json!({"a": 1}).as_records().is_none());
    }

    #[test]
    fn test_json_absent_is_null() {
        assert!(<serde_json::Value as Node>::absent().is_null());
    }

    #[test]
    fn test_yaml_integer_mapping_keys() {
        let doc: serde_yaml::Value = serde_yaml::from_str("1: one\n2:\n  3: deep\nname: x\n").unwrap();
        assert_eq!(
            doc.child(&Key::from(1)).and_then(serde_yaml::Value::as_str),
            Some("one")
        );
        let deep = doc.child(&Key::from(2)).and_then(|v| v.child(&Key::from(3)));
        assert_eq!(deep.and_then(serde_yaml::Value::as_str), Some("deep"));
        assert_eq!(
            doc.child(&Key::from("name")).and_then(serde_yaml::Value::as_str),
            Some("x")
        );
        assert!(doc.child(&Key::from(4)).is_none());
    }

    #[test]
    fn test_yaml_sequence_and_tag() {
        let doc: serde_yaml::Value = serde_yaml::from_str("items: !list [a, b]").unwrap();
        let items = doc.child(&Key::from("items")).unwrap();
        assert_eq!(
            items.child(&Key::from(-1)).and_then(serde_yaml::Value::as_str),
            Some("b")
        );
        assert_eq!(items.as_records().map(<[_]>::len), Some(2));
        assert!(<serde_yaml::Value as Node>::absent().is_null());
    }

    #[test]
    fn test_negative_mapping_key_is_literal() {
        let doc: serde_yaml::Value = serde_yaml::from_str("-1: present\nitems: [a, b]\n").unwrap();
        let key = Key::Index(-1);
        assert_eq!(
            doc.child_with(&key, false).and_then(serde_yaml::Value::as_str),
            Some("present")
        );
        let items = doc.child(&Key::from("items")).unwrap();
        assert!(items.child_with(&key, false).is_none());
        assert_eq!(items.child_with(&key, true).and_then(serde_yaml::Value::as_str), Some("b"));
    }

    #[test]
    fn test_json_negative_index_disallowed() {
        let doc = json!([1, 2]);
        assert_eq!(doc.child_with(&Key::Index(-1), false), None);
        assert_eq!(doc.child_with(&Key::Index(1), false), Some(&json!(2)));
    }
}
