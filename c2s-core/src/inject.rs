use serde_json::Value;

/// Reserved marker flags a skeleton uses to designate injection points.
///
/// A marker is an object node carrying `<flag>: true`. The node is replaced
/// wholesale by generated content; everything else in the skeleton passes
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `injectClassHere` — receives the generated `properties` object.
    Class,
    /// `injectHttpStatusExample` — receives a bare HTTP status code.
    HttpStatusExample,
    /// `injectHttpMessageExample` — receives a bare HTTP status message.
    HttpMessageExample,
}

impl Marker {
    pub fn flag(self) -> &'static str {
        match self {
            Marker::Class => "injectClassHere",
            Marker::HttpStatusExample => "injectHttpStatusExample",
            Marker::HttpMessageExample => "injectHttpMessageExample",
        }
    }
}

/// Replace every node marked with `marker` by a copy of `replacement`.
///
/// Depth-first over mapping and sequence structure. A replaced subtree is
/// not descended into, so a marker nested inside another marker's subtree is
/// left as-is. The root node itself is never replaced, only children.
/// Returns whether at least one marker was found.
pub fn inject_at_marker(tree: &mut Value, marker: Marker, replacement: &Value) -> bool {
    let mut found = false;
    match tree {
        Value::Object(map) => {
            for (_, child) in map.iter_mut() {
                if is_marked(child, marker) {
                    *child = replacement.clone();
                    found = true;
                } else {
                    found |= inject_at_marker(child, marker, replacement);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                if is_marked(item, marker) {
                    *item = replacement.clone();
                    found = true;
                } else {
                    found |= inject_at_marker(item, marker, replacement);
                }
            }
        }
        _ => {}
    }
    found
}

fn is_marked(node: &Value, marker: Marker) -> bool {
    node.as_object()
        .map(|obj| matches!(obj.get(marker.flag()), Some(Value::Bool(true))))
        .unwrap_or(false)
}
