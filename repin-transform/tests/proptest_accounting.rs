//! Property-based tests for the delta accounting contract.
//!
//! These tests verify that:
//! - Counts obey the single-line accounting rule for every pin pair
//! - The settled predicate and zero counts coincide exactly
//! - Setting the pin never disturbs the other manifest keys or their order

use camino::Utf8PathBuf;
use proptest::prelude::*;
use repin_transform::PinPlan;
use repin_transform::applier::pinned_contents;
use serde_json::{Map, Value};

/// Strategy for a plausible `<manager>@<version>` pin string.
fn arb_pin() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["npm", "pnpm", "yarn", "turbo"]),
        prop::string::string_regex(r"[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{1,2}").unwrap(),
    )
        .prop_map(|(manager, version)| format!("{manager}@{version}"))
}

/// Strategy for unrelated manifest keys.
fn arb_extra_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex(r"[a-z][a-zA-Z0-9]{0,12}").unwrap(),
        0..6,
    )
    .prop_map(|mut keys| {
        keys.sort();
        keys.dedup();
        keys.retain(|k| k != "packageManager");
        keys
    })
}

fn plan(existing: Option<String>, desired: String, extra_keys: &[String]) -> PinPlan {
    let mut manifest = Map::new();
    for key in extra_keys {
        manifest.insert(key.clone(), Value::String("x".to_string()));
    }
    if let Some(existing) = &existing {
        manifest.insert(
            "packageManager".to_string(),
            Value::String(existing.clone()),
        );
    }
    PinPlan {
        manifest_path: Utf8PathBuf::from("package.json"),
        desired,
        existing,
        manifest,
    }
}

proptest! {
    /// Adding is 1/0, replacing is 1/1, settled is 0/0, for any inputs.
    #[test]
    fn counts_follow_the_accounting_rule(
        existing in prop::option::of(arb_pin()),
        desired in arb_pin(),
    ) {
        let plan = plan(existing.clone(), desired.clone(), &[]);
        let (additions, deletions) = plan.counts();

        match existing {
            None => prop_assert_eq!((additions, deletions), (1, 0)),
            Some(existing) if existing == desired => {
                prop_assert_eq!((additions, deletions), (0, 0));
            }
            Some(_) => prop_assert_eq!((additions, deletions), (1, 1)),
        }
    }

    /// `is_settled` and a zero delta are the same statement.
    #[test]
    fn settled_iff_zero_counts(
        existing in prop::option::of(arb_pin()),
        desired in arb_pin(),
    ) {
        let plan = plan(existing, desired, &[]);
        let (additions, deletions) = plan.counts();
        prop_assert_eq!(plan.is_settled(), additions == 0 && deletions == 0);
    }

    /// The rewrite touches exactly one key: every other key survives in
    /// its original order, and the pin lands on the desired value.
    #[test]
    fn rewrite_preserves_other_keys(
        existing in prop::option::of(arb_pin()),
        desired in arb_pin(),
        extra_keys in arb_extra_keys(),
    ) {
        let plan = plan(existing, desired.clone(), &extra_keys);
        let contents = pinned_contents(&plan).expect("serialize");
        let rewritten: Value = serde_json::from_str(&contents).expect("parse");
        let rewritten = rewritten.as_object().expect("object");

        prop_assert_eq!(
            rewritten.get("packageManager"),
            Some(&Value::String(desired))
        );

        let surviving: Vec<&String> = rewritten
            .keys()
            .filter(|k| k.as_str() != "packageManager")
            .collect();
        prop_assert_eq!(surviving, extra_keys.iter().collect::<Vec<_>>());
    }
}
