/// Lookup and navigation tests: `for_path`, `for_args`, chaining, presence and
/// miss diagnostics.
use ask_core::{for_args, for_path, segments, Answer, Miss, PathError};
use serde_json::{json, Value};

/// `{"a": [{"b": 100, "c.d": true}]}`
fn source() -> Value {
    json!({
        "a": [
            {"b": 100, "c.d": true}
        ]
    })
}

// ============================================================================
// for_path
// ============================================================================

#[test]
fn for_path_finds_nested_value() {
    let src = source();
    assert_eq!(for_path(&src, "a[0].b").value(), Some(&json!(100)));
    assert_eq!(for_path(&src, "a[0].b").int(0), (100, true));
}

#[test]
fn for_path_index_out_of_range_is_missing() {
    let src = source();
    let answer = for_path(&src, "a[1].b");
    assert_eq!(answer.value(), None);
    assert_eq!(answer.int(0), (0, false));
}

#[test]
fn for_path_missing_key_before_index() {
    let src = source();
    let answer = for_path(&src, "d[1]");
    assert_eq!(answer.value(), None);
    assert!(!answer.exists());
}

#[test]
fn for_path_empty_returns_root() {
    let src = source();
    assert_eq!(for_path(&src, "").value(), Some(&src));
}

#[test]
fn for_path_invalid_path_is_missing() {
    let src = source();
    let answer = for_path(&src, "---");
    assert!(!answer.exists());
    assert!(matches!(
        answer.miss(),
        Some(Miss::InvalidPath(PathError::UnexpectedChar { .. }))
    ));
}

#[test]
fn for_path_leading_index_on_root_sequence() {
    let src = json!([{"name": "first"}, {"name": "second"}]);
    assert_eq!(
        for_path(&src, "[1].name").string(""),
        ("second".to_string(), true)
    );
}

#[test]
fn for_path_key_on_scalar_is_missing() {
    let src = source();
    assert!(!for_path(&src, "a[0].b.c").exists());
}

#[test]
fn for_path_index_on_mapping_is_missing() {
    let src = source();
    assert!(!for_path(&src, "a[0][0]").exists());
}

// ============================================================================
// for_args
// ============================================================================

#[test]
fn for_args_finds_nested_value() {
    let src = source();
    assert_eq!(for_args(&src, &segments!["a", 0, "b"]).value(), Some(&json!(100)));
}

#[test]
fn for_args_index_out_of_range_is_missing() {
    let src = source();
    assert_eq!(for_args(&src, &segments!["a", 1, "b"]).value(), None);
}

#[test]
fn for_args_missing_key_before_index() {
    let src = source();
    assert_eq!(for_args(&src, &segments!["d", 1]).value(), None);
}

#[test]
fn for_args_key_with_dot() {
    let src = source();
    assert_eq!(
        for_args(&src, &segments!["a", 0, "c.d"]).value(),
        Some(&json!(true))
    );
}

#[test]
fn for_args_dotted_key_at_root() {
    let src = json!({"c.d": true});
    assert_eq!(for_args(&src, &segments!["c.d"]).bool(false), (true, true));
}

#[test]
fn for_args_empty_key_is_a_no_op() {
    let src = source();
    assert_eq!(for_args(&src, &segments![""]).value(), Some(&src));
    assert_eq!(for_args(&src, &segments![]).value(), Some(&src));
}

#[test]
fn for_args_keys_are_not_parsed() {
    let src = source();
    // "---" is a plain (absent) key here, not a syntax error.
    let answer = for_args(&src, &segments!["---"]);
    assert!(!answer.exists());
    assert!(matches!(answer.miss(), Some(Miss::MissingKey { key, at: 0 }) if key == "---"));
}

#[test]
fn for_args_negative_index_is_missing() {
    let src = source();
    let answer = for_args(&src, &segments!["a", -1]);
    assert_eq!(
        answer.miss(),
        Some(&Miss::IndexOutOfRange {
            index: -1,
            len: 1,
            at: 1
        })
    );
}

// ============================================================================
// Chaining
// ============================================================================

#[test]
fn path_continues_from_answer() {
    let src = source();
    assert_eq!(for_path(&src, "a[0]").path("b").value(), Some(&json!(100)));
}

#[test]
fn path_on_missing_answer_stays_missing() {
    let src = source();
    assert_eq!(for_path(&src, "a[1]").path("b").value(), None);
}

#[test]
fn empty_relative_path_is_identity() {
    let src = source();
    assert_eq!(for_path(&src, "").path("").value(), Some(&src));
    assert_eq!(for_path(&src, "a[0]").path(""), for_path(&src, "a[0]"));
    assert_eq!(for_path(&src, "zzz").path(""), for_path(&src, "zzz"));
    assert!(!for_path(&src, "zzz").path("").exists());
}

#[test]
fn path_args_continues_from_answer() {
    let src = source();
    assert_eq!(
        for_path(&src, "a").path_args(&segments![0, "b"]).value(),
        Some(&json!(100))
    );
}

#[test]
fn path_args_on_missing_answer_stays_missing() {
    let src = source();
    assert_eq!(for_path(&src, "a[1]").path_args(&segments!["b"]).value(), None);
}

#[test]
fn path_args_empty_key_returns_source() {
    let src = source();
    assert_eq!(for_path(&src, "").path_args(&segments![""]).value(), Some(&src));
}

#[test]
fn absence_keeps_first_miss_through_chain() {
    let src = source();
    let answer = for_path(&src, "nope").path("a[0]").path_args(&segments!["b"]);
    assert_eq!(
        answer.miss(),
        Some(&Miss::MissingKey {
            key: "nope".into(),
            at: 0
        })
    );
}

// ============================================================================
// Exists / Value / nil normalization
// ============================================================================

#[test]
fn exists_reports_presence() {
    let src = json!({"value1": "test", "value2": 0, "nil": null});
    assert!(for_path(&src, "value1").exists());
    assert!(for_path(&src, "value2").exists());
    assert!(!for_path(&src, "nil").exists());
    assert!(!for_path(&src, "nothing").exists());
}

#[test]
fn null_is_the_same_as_missing() {
    let src = json!({"nil": null});
    let answer = for_path(&src, "nil");
    assert_eq!(answer.value(), None);
    assert_eq!(answer.miss(), Some(&Miss::Null));
    assert_eq!(answer.string("d"), ("d".to_string(), false));
    assert_eq!(answer.int(5), (5, false));
}

#[test]
fn null_root_is_missing() {
    let src = Value::Null;
    assert!(!Answer::new(&src).exists());
    assert!(!for_path(&src, "").exists());
}

#[test]
fn null_root_reports_null_before_path_syntax() {
    let src = Value::Null;
    let answer = for_path(&src, "---");
    assert!(!answer.exists());
    assert_eq!(answer.miss(), Some(&Miss::Null));
}

#[test]
fn value_returns_found_node() {
    let src = json!({"value1": "test", "value2": 0});
    assert_eq!(for_path(&src, "value1").value(), Some(&json!("test")));
    assert_eq!(for_path(&src, "value2").value(), Some(&json!(0)));
    assert_eq!(for_path(&src, "nothing").value(), None);
}

#[test]
fn present_answer_has_no_miss() {
    let src = source();
    assert_eq!(for_path(&src, "a").miss(), None);
}

// ============================================================================
// Miss diagnostics
// ============================================================================

#[test]
fn miss_names_failing_segment() {
    let src = source();
    assert_eq!(
        for_path(&src, "a[0].x").miss(),
        Some(&Miss::MissingKey {
            key: "x".into(),
            at: 2
        })
    );
    assert_eq!(
        for_path(&src, "a[0].b.c").miss(),
        Some(&Miss::NotAMapping {
            key: "c".into(),
            at: 3
        })
    );
    assert_eq!(
        for_path(&src, "a.x").miss(),
        Some(&Miss::NotAMapping {
            key: "x".into(),
            at: 1
        })
    );
    assert_eq!(
        for_path(&src, "a[0][2]").miss(),
        Some(&Miss::NotASequence { index: 2, at: 2 })
    );
}

#[test]
fn miss_display_is_readable() {
    let src = source();
    let miss = for_path(&src, "a[3]").miss().cloned().unwrap();
    assert_eq!(
        miss.to_string(),
        "index 3 out of range for sequence of length 1 (segment 1)"
    );
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn lookups_share_a_tree_across_threads() {
    let src = source();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| for_path(&src, "a[0].b").int(0)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), (100, true));
        }
    });
}
