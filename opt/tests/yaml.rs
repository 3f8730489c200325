//! YAML encoding and decoding of `Opt` fields and nodes.

use opt::Opt;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_yaml::Value;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct IntRecord {
    val: Opt<i32>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct ListRecord {
    val: Opt<Vec<String>>,
}

struct Channel;

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("channel values cannot be serialized"))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Struct fields
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn some_round_trip() {
    let rec = IntRecord { val: Opt::some(123) };
    let yaml = serde_yaml::to_string(&rec).unwrap();
    assert_eq!(yaml, "val: 123\n");

    let back: IntRecord = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn none_round_trip() {
    let rec = IntRecord { val: Opt::none() };
    let yaml = serde_yaml::to_string(&rec).unwrap();
    assert_eq!(yaml, "val: null\n");

    let back: IntRecord = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn sequence_payload_round_trip() {
    let rec = ListRecord {
        val: Opt::some(vec!["a".into(), "b".into()]),
    };
    let yaml = serde_yaml::to_string(&rec).unwrap();
    assert_eq!(yaml, "val:\n- a\n- b\n");

    let back: ListRecord = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn null_spellings_decode_as_none() {
    for doc in ["val: ~\n", "val: Null\n", "val: NULL\n"] {
        let back: IntRecord = serde_yaml::from_str(doc).unwrap();
        assert_eq!(back, IntRecord { val: Opt::none() }, "document: {doc:?}");
    }
}

#[test]
fn missing_field_decodes_as_none() {
    let back: IntRecord = serde_yaml::from_str("{}").unwrap();
    assert_eq!(back, IntRecord { val: Opt::none() });
}

#[test]
fn wrong_payload_type_is_an_error() {
    assert!(serde_yaml::from_str::<IntRecord>("val: not-an-int\n").is_err());
}

#[test]
fn unsupported_payload_fails_to_encode() {
    let err = serde_yaml::to_string(&Opt::some(Channel)).unwrap_err();
    assert!(err.to_string().contains("channel values cannot be serialized"));
    assert!(serde_yaml::to_string(&Opt::<Channel>::none()).is_ok());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Node-level entry points
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn marshal_yaml() {
    assert_eq!(Opt::some(123).marshal_yaml().unwrap(), Value::from(123));
    assert_eq!(
        Opt::some("x").marshal_yaml().unwrap(),
        Value::String("x".into())
    );
    assert_eq!(Opt::<i32>::none().marshal_yaml().unwrap(), Value::Null);
    assert!(Opt::some(Channel).marshal_yaml().is_err());
}

#[test]
fn unmarshal_yaml_value() {
    let mut slot: Opt<i32> = Opt::default();
    slot.unmarshal_yaml(Value::from(123)).unwrap();
    assert_eq!(slot, Opt::some(123));
}

#[test]
fn unmarshal_yaml_null_overwrites_some() {
    let mut slot = Opt::some(7);
    slot.unmarshal_yaml(Value::Null).unwrap();
    assert!(slot.is_none());
}

#[test]
fn unmarshal_yaml_error_leaves_none() {
    let mut slot = Opt::some(7);
    assert!(slot.unmarshal_yaml(Value::String("x".into())).is_err());
    assert!(slot.is_none());
}

#[test]
fn marshal_then_unmarshal() {
    let original = Opt::some(vec![1u8, 2, 3]);
    let node = original.marshal_yaml().unwrap();

    let mut decoded: Opt<Vec<u8>> = Opt::none();
    decoded.unmarshal_yaml(node).unwrap();
    assert_eq!(decoded, original);

    let node = Opt::<Vec<u8>>::none().marshal_yaml().unwrap();
    decoded.unmarshal_yaml(node).unwrap();
    assert!(decoded.is_none());
}
