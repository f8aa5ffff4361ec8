#![allow(clippy::unwrap_used, clippy::expect_used)]

use objutils_core::errors::ObjError;
use objutils_core::logging_facility::test_capture::init_test_capture;
use objutils_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DEPTH, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERROR, FIELD_ERR_KIND, FIELD_FOUND, FIELD_KEY_COUNT, FIELD_PATH, FIELD_RESULT_LEN,
    FIELD_SEGMENT_COUNT, OP_FILTER, OP_GET, OP_OMIT, OP_SET,
};
use objutils_core::{log_op_end, log_op_error, log_op_start, ObjectUtils};
use serde_json::{json, Map};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, ObjError::EmptyPath, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_EMPTY_PATH"));
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("EmptyPath"));
    assert_eq!(error_event.level, tracing::Level::WARN);
}

#[test]
fn test_log_op_error_tags_error_with_op() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    log_op_error!(op_name, ObjError::EmptyPath, duration_ms = 0);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    let rendered = error_event.field(FIELD_ERROR).expect("Should carry rendered error");
    assert!(rendered.starts_with("[ERR_EMPTY_PATH] in operation 'test_log_op_error_unique_4'"));
}

// ===== FACADE LIFECYCLE =====

#[test]
fn test_get_emits_start_and_end_once() {
    let capture = init_test_capture();
    let data = json!({"facade_get_unique": {"x": false}});

    let found = ObjectUtils::get(&data, "facade_get_unique.x");
    assert_eq!(found, Some(&json!(false)));

    let events = capture.events_for_path(OP_GET, "facade_get_unique.x");
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(starts, 1, "Should have exactly one start event");
    assert_eq!(ends.len(), 1, "Should have exactly one end event");
    assert_eq!(ends[0].field(FIELD_FOUND), Some("true"));
}

#[test]
fn test_get_miss_is_not_an_error_event() {
    let capture = init_test_capture();
    let data = json!({});

    assert_eq!(ObjectUtils::get(&data, "facade_miss_unique.a.b"), None);

    let events = capture.events_for_path(OP_GET, "facade_miss_unique.a.b");
    assert!(events
        .iter()
        .all(|e| e.event.as_deref() != Some(EVENT_END_ERROR)));
    let end = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .expect("Should have end event");
    assert_eq!(end.field(FIELD_FOUND), Some("false"));
}

#[test]
fn test_set_failure_emits_error_event() {
    let capture = init_test_capture();
    let mut data = json!({"facade_set_unique": [1]});

    let before = capture.count_events(|e| {
        e.op.as_deref() == Some(OP_SET) && e.event.as_deref() == Some(EVENT_END_ERROR)
    });
    let err = ObjectUtils::set(&mut data, "", json!(0)).unwrap_err();
    assert_eq!(err, ObjError::EmptyPath);
    assert_eq!(data, json!({"facade_set_unique": [1]}));

    let errors: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.op.as_deref() == Some(OP_SET) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert!(errors.len() > before, "Should have a new set error event");
    assert!(errors.iter().all(|e| e.field(FIELD_ERR_CODE) == Some("ERR_EMPTY_PATH")));
    assert!(errors.iter().all(|e| e.field(FIELD_ERR_KIND) == Some("EmptyPath")));
}

#[test]
fn test_set_past_sequence_end_is_not_an_error_event() {
    let capture = init_test_capture();
    let mut data = json!({"facade_pad_unique": [1]});

    ObjectUtils::set(&mut data, "facade_pad_unique.3", json!(4)).unwrap();
    assert_eq!(data, json!({"facade_pad_unique": [1, null, null, 4]}));

    let events = capture.events_for_path(OP_SET, "facade_pad_unique.3");
    assert!(events
        .iter()
        .all(|e| e.event.as_deref() != Some(EVENT_END_ERROR)));
    let start = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_START))
        .expect("Should have start event");
    assert_eq!(start.field(FIELD_SEGMENT_COUNT), Some("2"));
}

#[test]
fn test_get_stop_records_depth() {
    let capture = init_test_capture();
    let data = json!({"facade_depth_unique": {"a": null}});

    assert_eq!(ObjectUtils::get(&data, "facade_depth_unique.a.b"), None);

    let stops = capture.count_events(|e| {
        e.op.is_none()
            && e.field(FIELD_PATH) == Some("facade_depth_unique.a.b")
            && e.field(FIELD_DEPTH) == Some("1")
    });
    assert_eq!(stops, 1, "Should stop once, at the null second segment");
}

#[test]
fn test_set_success_emits_end_event() {
    let capture = init_test_capture();
    let mut data = Map::new();

    ObjectUtils::set(&mut data, "facade_set_ok_unique.a", json!(1)).unwrap();

    let events = capture.events_for_path(OP_SET, "facade_set_ok_unique.a");
    assert_eq!(
        events
            .iter()
            .filter(|e| e.event.as_deref() == Some(EVENT_END))
            .count(),
        1
    );
}

#[test]
fn test_filter_end_event_carries_result_len() {
    let capture = init_test_capture();
    let data = Map::from_iter([
        ("a".to_string(), json!(1)),
        ("b".to_string(), json!(2)),
    ]);
    let keys = ["a", "b", "facade_filter_unique_key"];

    let kept = ObjectUtils::filter(&data, &keys);
    assert_eq!(kept.len(), 2);

    let found = capture.count_events(|e| {
        e.op.as_deref() == Some(OP_FILTER)
            && e.event.as_deref() == Some(EVENT_END)
            && e.field(FIELD_RESULT_LEN) == Some("2")
    });
    assert!(found >= 1, "Should have a filter end event with result_len=2");
}

#[test]
fn test_omit_start_event_carries_key_count() {
    let capture = init_test_capture();
    let data = Map::from_iter([("a".to_string(), json!(1))]);
    let keys = ["a", "facade_omit_unique_1", "facade_omit_unique_2"];

    let rest = ObjectUtils::omit(&data, &keys);
    assert!(rest.is_empty());

    let found = capture.count_events(|e| {
        e.op.as_deref() == Some(OP_OMIT)
            && e.event.as_deref() == Some(EVENT_START)
            && e.field(FIELD_KEY_COUNT) == Some("3")
    });
    assert!(found >= 1, "Should have an omit start event with key_count=3");
}
