use serde_json::{json, Map, Value};

use crate::registry::{FieldKind, PropertyRegistry};

/// Build the `properties` mapping for a registered DTO type.
///
/// For each field in registration order, emits
/// `name -> { "type", "description", "example" }`. Missing descriptions and
/// examples degrade to empty strings; an unknown type degrades to an empty
/// map. Never fails.
pub fn dto_properties(registry: &PropertyRegistry, type_name: &str) -> Map<String, Value> {
    let mut properties = Map::new();
    for field_name in registry.ordered_fields(type_name) {
        let kind = registry
            .kind(type_name, field_name)
            .unwrap_or(FieldKind::Object);
        let description = registry
            .metadata(type_name, field_name)
            .and_then(|metadata| metadata.description.as_deref())
            .unwrap_or("");
        let example = registry.example(type_name, field_name).unwrap_or("");
        properties.insert(
            field_name.clone(),
            json!({
                "type": kind.as_str(),
                "description": description,
                "example": example,
            }),
        );
    }
    properties
}
