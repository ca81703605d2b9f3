use enumforge::core::constant::{Behaviour, VALUE_FIELD};
use enumforge::core::enumeration::{BehaviourSpec, ConstructInput, Enum};
use enumforge::core::error::EnumError;
use serde_json::json;
use serde_json::Value as JsonValue;

fn behaviour(entries: &[(&str, JsonValue)]) -> Behaviour {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[test]
fn keyed_refuses_sequences_shorter_than_one_pair() {
    assert!(matches!(
        Enum::keyed(&[], Behaviour::new()),
        Err(EnumError::TooShort)
    ));
    assert!(matches!(
        Enum::keyed(&[json!("A")], Behaviour::new()),
        Err(EnumError::TooShort)
    ));
}

#[test]
fn keyed_refuses_odd_length_sequences() {
    let flat = [json!("A"), json!({"a": "a"}), json!("B")];
    assert!(matches!(
        Enum::keyed(&flat, Behaviour::new()),
        Err(EnumError::OddLength)
    ));
}

#[test]
fn keyed_refuses_duplicate_keys() {
    let flat = [
        json!("A"),
        json!({"a": "a"}),
        json!("A"),
        json!({"c": "c"}),
    ];
    match Enum::keyed(&flat, Behaviour::new()) {
        Err(EnumError::DuplicateKey { key }) => assert_eq!(key, "A"),
        other => panic!("expected duplicate key error, got {:?}", other),
    }
}

#[test]
fn keyed_duplicate_report_is_deterministic_with_several_collisions() {
    // Both C and B collide; the lexicographically first one is reported.
    let flat = [
        json!("C"),
        json!(1),
        json!("B"),
        json!(2),
        json!("C"),
        json!(3),
        json!("B"),
        json!(4),
    ];
    match Enum::keyed(&flat, Behaviour::new()) {
        Err(EnumError::DuplicateKey { key }) => assert_eq!(key, "B"),
        other => panic!("expected duplicate key error, got {:?}", other),
    }
}

#[test]
fn keyed_refuses_invalid_keys() {
    for bad in ["a", "1A", "A-A", "-A", "+A", "%A"] {
        match Enum::keyed(&[json!(bad), json!({"a": "a"})], Behaviour::new()) {
            Err(EnumError::InvalidName { key, index }) => {
                assert_eq!(key, bad);
                assert_eq!(index, 0);
            }
            other => panic!("expected invalid name error for '{}', got {:?}", bad, other),
        }
    }
}

#[test]
fn keyed_refuses_non_string_keys_as_invalid_names() {
    for bad in [json!(1), json!(true), json!(null), json!({"k": 1})] {
        assert!(matches!(
            Enum::keyed(&[bad, json!({"a": "a"})], Behaviour::new()),
            Err(EnumError::InvalidName { .. })
        ));
    }
}

#[test]
fn keyed_reports_the_constant_index_not_the_flat_index() {
    let flat = [
        json!("A"),
        json!(null),
        json!("B"),
        json!(null),
        json!("bad"),
        json!(null),
    ];
    match Enum::keyed(&flat, Behaviour::new()) {
        Err(EnumError::InvalidName { key, index }) => {
            assert_eq!(key, "bad");
            assert_eq!(index, 2);
        }
        other => panic!("expected invalid name error, got {:?}", other),
    }
}

#[test]
fn keyed_assigns_scalar_payloads_under_value() {
    for scalar in [json!("a"), json!(null), json!(true), json!(1)] {
        let e = Enum::keyed(&[json!("A"), scalar.clone()], Behaviour::new()).unwrap();
        let a = e.get("A").unwrap();
        assert_eq!(a.value(), Some(&scalar));
        assert_eq!(a.get(VALUE_FIELD), Some(&scalar));
        assert!(a.has_own(VALUE_FIELD));
    }
}

#[test]
fn keyed_projects_object_payload_members() {
    let e = Enum::keyed(
        &[
            json!("A"),
            json!({"a": "Aa", "b": "Ab"}),
            json!("B"),
            json!({"a": "Ba", "b": "Bb", "c": "Bc"}),
        ],
        Behaviour::new(),
    )
    .unwrap();

    let a = e.get("A").unwrap();
    let b = e.get("B").unwrap();
    assert_eq!(a.get("a"), Some(&json!("Aa")));
    assert_eq!(a.get("b"), Some(&json!("Ab")));
    assert_eq!(b.get("a"), Some(&json!("Ba")));
    assert_eq!(b.get("c"), Some(&json!("Bc")));
    assert!(a.value().is_none());
    assert!(a.get("c").is_none());
    assert!(a.has_own("a"));
    assert!(!a.has_own("c"));
}

#[test]
fn keyed_refuses_reserved_member_names() {
    for reserved in ["$key", "$id"] {
        match Enum::keyed(&[json!("A"), json!({reserved: "x"})], Behaviour::new()) {
            Err(EnumError::ReservedMemberName { name }) => assert_eq!(name, reserved),
            other => panic!("expected reserved member error, got {:?}", other),
        }
    }
}

#[test]
fn keyed_refuses_reserved_behaviour_names() {
    for reserved in ["$key", "$id"] {
        let be = behaviour(&[(reserved, json!("x"))]);
        match Enum::keyed(&[json!("A"), json!({"a": "a"})], be) {
            Err(EnumError::ReservedBehaviourName { name }) => assert_eq!(name, reserved),
            other => panic!("expected reserved behaviour error, got {:?}", other),
        }
    }
}

#[test]
fn keyed_binds_key_and_id_to_every_constant() {
    let e = Enum::keyed(
        &[json!("A"), json!(null), json!("B"), json!(null)],
        Behaviour::new(),
    )
    .unwrap();

    let a = e.get("A").unwrap();
    let b = e.get("B").unwrap();
    assert_eq!(a.key(), "A");
    assert_eq!(b.key(), "B");
    assert_ne!(a.id(), b.id());
    assert_ne!(a.id().to_string(), b.id().to_string());
    assert_eq!(a.to_string(), "A");
}

#[test]
fn identity_tokens_differ_across_constructions_of_the_same_name() {
    let flat = [json!("A"), json!(null)];
    let first = Enum::keyed(&flat, Behaviour::new()).unwrap();
    let second = Enum::keyed(&flat, Behaviour::new()).unwrap();
    assert_ne!(
        first.get("A").unwrap().id(),
        second.get("A").unwrap().id()
    );
    assert_ne!(first.get("A").unwrap(), second.get("A").unwrap());
}

#[test]
fn behaviour_is_visible_on_every_constant() {
    let be = behaviour(&[
        ("P1", json!(42)),
        ("P2", json!("K2")),
        ("P3", json!(true)),
        ("P4", json!({})),
        ("P6", json!({"a": "a"})),
    ]);
    let e = Enum::keyed(
        &[
            json!("A"),
            json!({"a": "Aa"}),
            json!("B"),
            json!({"a": "Ba"}),
            json!("C"),
            json!({"a": "Ca"}),
        ],
        be.clone(),
    )
    .unwrap();

    for constant in &e {
        for (name, value) in &be {
            assert_eq!(constant.get(name), Some(value));
        }
    }
    assert_eq!(e.behaviour(), Some(&be));
}

#[test]
fn own_payload_wins_over_behaviour() {
    let be = behaviour(&[("a", json!(1))]);
    let e = Enum::keyed(&[json!("A"), json!({"a": 2})], be).unwrap();
    assert_eq!(e.get("A").unwrap().get("a"), Some(&json!(2)));
}

#[test]
fn accessors_respect_declaration_order_on_every_call() {
    let e = Enum::keyed(
        &[
            json!("C"),
            json!({"a": "Ca"}),
            json!("A"),
            json!({"a": "Aa"}),
            json!("B"),
            json!({"a": "Ba"}),
        ],
        Behaviour::new(),
    )
    .unwrap();

    for _ in 0..2 {
        assert_eq!(e.keys(), ["C", "A", "B"]);

        let values = e.values();
        assert_eq!(values[0].key(), "C");
        assert_eq!(values[1].key(), "A");
        assert_eq!(values[2].key(), "B");
        assert_eq!(values[0].get("a"), Some(&json!("Ca")));

        let entries = e.entries();
        assert_eq!(entries[0].0, "C");
        assert_eq!(entries[1].0, "A");
        assert_eq!(entries[2].0, "B");
        assert_eq!(entries[2].1.get("a"), Some(&json!("Ba")));

        let iterated: Vec<&str> = e.iter().map(|c| c.key()).collect();
        assert_eq!(iterated, ["C", "A", "B"]);

        let mut looped = Vec::new();
        for constant in &e {
            looped.push(constant.key().to_string());
        }
        assert_eq!(looped, ["C", "A", "B"]);
    }
}

#[test]
fn symbol_only_refuses_empty_input() {
    assert!(matches!(
        Enum::symbol_only(&[]),
        Err(EnumError::EmptyNames)
    ));
}

#[test]
fn symbol_only_refuses_duplicate_names() {
    match Enum::symbol_only(&[json!("A"), json!("A")]) {
        Err(EnumError::DuplicateKey { key }) => assert_eq!(key, "A"),
        other => panic!("expected duplicate key error, got {:?}", other),
    }
}

#[test]
fn symbol_only_refuses_non_string_names_with_their_type() {
    let cases = [
        (json!(1), "number"),
        (json!(null), "null"),
        (json!(true), "boolean"),
        (json!({}), "object"),
        (json!([]), "array"),
    ];
    for (bad, expected) in cases {
        match Enum::symbol_only(&[bad]) {
            Err(EnumError::NonStringKey { index, found }) => {
                assert_eq!(index, 0);
                assert_eq!(found, expected);
            }
            other => panic!("expected non-string key error, got {:?}", other),
        }
    }
}

#[test]
fn symbol_only_refuses_invalid_names() {
    for bad in ["a", "1A", "A-A", "-A", "+A", "%A"] {
        match Enum::symbol_only(&[json!(bad)]) {
            Err(EnumError::InvalidName { key, index }) => {
                assert_eq!(key, bad);
                assert_eq!(index, 0);
            }
            other => panic!("expected invalid name error for '{}', got {:?}", bad, other),
        }
    }
}

#[test]
fn symbol_only_constants_are_bare_tokens() {
    let e = Enum::symbol_only(&[json!("A"), json!("B"), json!("C")]).unwrap();

    assert!(e.is_symbol_only());
    assert!(e.behaviour().is_none());
    assert_eq!(e.len(), 3);

    for constant in &e {
        assert!(constant.value().is_none());
        assert!(constant.members().is_none());
        assert!(constant.get("anything").is_none());
    }
    assert_ne!(e.get("A").unwrap().id(), e.get("B").unwrap().id());
}

#[test]
fn symbol_only_preserves_declaration_order() {
    let e = Enum::symbol_only(&[json!("C"), json!("A"), json!("B")]).unwrap();
    assert_eq!(e.keys(), ["C", "A", "B"]);
    let iterated: Vec<&str> = e.iter().map(|c| c.key()).collect();
    assert_eq!(iterated, ["C", "A", "B"]);
}

#[test]
fn construct_dispatches_on_the_behaviour_argument() {
    let flat = [json!("A"), json!({"a": "Aa"})];

    let keyed = Enum::construct(ConstructInput::Values(&flat), BehaviourSpec::Absent).unwrap();
    assert!(!keyed.is_symbol_only());

    let keyed_false =
        Enum::construct(ConstructInput::Values(&flat), BehaviourSpec::Flag(false)).unwrap();
    assert!(!keyed_false.is_symbol_only());

    let with_map = Enum::construct(
        ConstructInput::Values(&flat),
        BehaviourSpec::Map(behaviour(&[("shared", json!("x"))])),
    )
    .unwrap();
    assert_eq!(with_map.get("A").unwrap().get("shared"), Some(&json!("x")));

    let symbols = Enum::construct(
        ConstructInput::Values(&[json!("A"), json!("B")]),
        BehaviourSpec::Flag(true),
    )
    .unwrap();
    assert!(symbols.is_symbol_only());
    assert_eq!(symbols.keys(), ["A", "B"]);
}

#[test]
fn entries_round_trip_into_a_fresh_keyed_construction() {
    let e = Enum::keyed(
        &[
            json!("C"),
            json!({"a": "Ca", "b": "Cb"}),
            json!("A"),
            json!("scalar"),
            json!("B"),
            json!({}),
        ],
        Behaviour::new(),
    )
    .unwrap();

    let mut flat = Vec::new();
    for (key, constant) in e.entries() {
        flat.push(json!(key));
        flat.push(constant.to_payload());
    }
    let rebuilt = Enum::keyed(&flat, Behaviour::new()).unwrap();

    assert_eq!(rebuilt.keys(), e.keys());
    for (original, copy) in e.iter().zip(rebuilt.iter()) {
        assert_eq!(original.to_payload(), copy.to_payload());
        assert_ne!(original.id(), copy.id());
    }
}
