//! Merge laws: left-to-right overlay, absent keys never overwrite, shallow only.

use everything_model::merge::merge_objects;
use everything_model::{Group, ModelError, Partial, Post, merge};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

fn partial(value: Value) -> Partial {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Sample {
    a: i64,
    b: i64,
    label: Option<String>,
    nested: Value,
}

impl Default for Sample {
    fn default() -> Self {
        Self {
            a: 0,
            b: 0,
            label: Some("default".into()),
            nested: json!({"x": 1, "y": 2}),
        }
    }
}

// ── Overlay ─────────────────────────────────────────────────────

#[test]
fn later_sources_win() {
    let merged = merge(
        Sample::default(),
        [partial(json!({"a": 1})), partial(json!({"a": 2, "b": 3}))],
    )
    .unwrap();

    assert_eq!(
        merged,
        Sample {
            a: 2,
            b: 3,
            ..Sample::default()
        }
    );
}

#[test]
fn missing_keys_keep_defaults() {
    let merged = merge(Sample::default(), [partial(json!({}))]).unwrap();
    assert_eq!(merged, Sample::default());
}

#[test]
fn explicit_null_overwrites() {
    let merged = merge(Sample::default(), [partial(json!({"label": null}))]).unwrap();
    assert_eq!(merged.label, None);
}

#[test]
fn nested_objects_are_replaced_not_merged() {
    let merged = merge(Sample::default(), [partial(json!({"nested": {"x": 9}}))]).unwrap();
    assert_eq!(merged.nested, json!({"x": 9}));
}

#[test]
fn no_sources_is_identity() {
    let merged = merge(Sample::default(), std::iter::empty::<Partial>()).unwrap();
    assert_eq!(merged, Sample::default());
}

#[test]
fn wrong_shape_is_a_decode_error() {
    let err = merge(Sample::default(), [partial(json!({"a": "one"}))]).unwrap_err();
    assert!(matches!(err, ModelError::Decode(_)));
}

#[test]
fn merge_objects_inserts_new_keys() {
    let mut target = partial(json!({"a": 1}));
    merge_objects(&mut target, [partial(json!({"z": true}))]);
    assert_eq!(Value::Object(target), json!({"a": 1, "z": true}));
}

// ── Entity defaults ─────────────────────────────────────────────

#[test]
fn group_defaults_survive_partial_merge() {
    let merged = merge(
        Group::default(),
        [partial(json!({"display_name": "rust", "subscribers": 42}))],
    )
    .unwrap();

    assert_eq!(merged.base.display_name.as_deref(), Some("rust"));
    assert_eq!(merged.base.subscribers, Some(42));
    assert_eq!(merged.whitelist_status.as_deref(), Some("all_ads"));
    assert_eq!(merged.wls, Some(6));
}

#[test]
fn post_null_overwrites_platform_default() {
    let merged = merge(
        Post::default(),
        [partial(json!({"title": null, "pwls": null, "send_replies": null}))],
    )
    .unwrap();
    assert_eq!(merged.title, None);
    assert_eq!(merged.pwls, None);
    assert_eq!(merged.base.send_replies, None);
    assert_eq!(merged.wls, Some(6));
}

#[test]
fn later_value_replaces_earlier_null() {
    let merged = merge(
        Post::default(),
        [partial(json!({"pwls": null})), partial(json!({"pwls": 7}))],
    )
    .unwrap();
    assert_eq!(merged.pwls, Some(7));
}

// ── Properties ──────────────────────────────────────────────────

fn small_partial() -> impl Strategy<Value = Partial> {
    prop::collection::btree_map(
        prop::sample::select(vec!["a", "b"]),
        -1000i64..1000,
        0..=2,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), json!(value)))
            .collect()
    })
}

proptest! {
    /// The last source that mentions a key decides it.
    #[test]
    fn last_writer_wins(sources in prop::collection::vec(small_partial(), 0..5)) {
        let merged = merge(Sample::default(), sources.clone()).unwrap();

        for key in ["a", "b"] {
            let expected = sources
                .iter()
                .rev()
                .find_map(|source| source.get(key))
                .and_then(Value::as_i64)
                .unwrap_or(0);
            let actual = if key == "a" { merged.a } else { merged.b };
            prop_assert_eq!(actual, expected);
        }
        prop_assert_eq!(merged.label, Sample::default().label);
    }

    /// Merging the same partial twice changes nothing.
    #[test]
    fn merge_is_idempotent(source in small_partial()) {
        let once = merge(Sample::default(), [source.clone()]).unwrap();
        let twice = merge(once.clone(), [source]).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Applying sources one call at a time equals applying them together.
    #[test]
    fn merge_is_sequential(first in small_partial(), second in small_partial()) {
        let together = merge(Sample::default(), [first.clone(), second.clone()]).unwrap();
        let stepwise = merge(merge(Sample::default(), [first]).unwrap(), [second]).unwrap();
        prop_assert_eq!(together, stepwise);
    }
}
