use c2s_core::{inject_at_marker, Marker};
use serde_json::json;

#[test]
fn replaces_a_marked_child_node() {
    let mut tree = json!({
        "type": "object",
        "properties": { "injectClassHere": true },
    });
    let replacement = json!({ "id": { "type": "integer" } });

    assert!(inject_at_marker(&mut tree, Marker::Class, &replacement));
    assert_eq!(
        tree,
        json!({
            "type": "object",
            "properties": { "id": { "type": "integer" } },
        })
    );
}

#[test]
fn finds_markers_nested_deep_in_objects_and_arrays() {
    let mut tree = json!({
        "allOf": [
            { "type": "string" },
            { "data": { "example": { "injectHttpStatusExample": true } } },
        ],
    });

    assert!(inject_at_marker(&mut tree, Marker::HttpStatusExample, &json!(400)));
    assert_eq!(tree["allOf"][1]["data"]["example"], json!(400));
}

#[test]
fn returns_false_when_no_marker_exists() {
    let mut tree = json!({ "type": "object", "properties": {} });
    let before = tree.clone();

    assert!(!inject_at_marker(&mut tree, Marker::Class, &json!({})));
    assert_eq!(tree, before);
}

#[test]
fn does_not_match_other_flags() {
    let mut tree = json!({ "example": { "injectHttpMessageExample": true } });

    assert!(!inject_at_marker(&mut tree, Marker::HttpStatusExample, &json!(500)));
    assert!(inject_at_marker(&mut tree, Marker::HttpMessageExample, &json!("Bad request")));
    assert_eq!(tree["example"], json!("Bad request"));
}

#[test]
fn flag_must_be_literally_true() {
    let mut tree = json!({ "properties": { "injectClassHere": false } });

    assert!(!inject_at_marker(&mut tree, Marker::Class, &json!({})));
}

#[test]
fn never_descends_into_a_replaced_subtree() {
    // The outer marker's subtree contains another marker; only the outer
    // node is replaced, and the replacement is not scanned again.
    let mut tree = json!({
        "outer": {
            "injectClassHere": true,
            "inner": { "injectClassHere": true },
        },
    });
    let replacement = json!({ "injectClassHere": true, "done": 1 });

    assert!(inject_at_marker(&mut tree, Marker::Class, &replacement));
    assert_eq!(tree, json!({ "outer": { "injectClassHere": true, "done": 1 } }));
}

#[test]
fn replaces_every_node_carrying_the_flag() {
    let mut tree = json!({
        "a": { "injectClassHere": true },
        "b": { "nested": { "injectClassHere": true } },
    });

    assert!(inject_at_marker(&mut tree, Marker::Class, &json!("x")));
    assert_eq!(tree, json!({ "a": "x", "b": { "nested": "x" } }));
}
