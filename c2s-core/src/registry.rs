use std::collections::HashMap;

use tracing::{debug, warn};

/// The OpenAPI primitive kind a DTO field maps to.
///
/// The mapping from declared Rust types is computed at compile time by
/// `#[derive(DtoSchema)]`: string-like types map to `String`, every numeric
/// primitive maps to `Integer`, `bool` maps to `Boolean`, and anything else
/// maps to `Object`. `Option<T>` is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    Object,
}

impl FieldKind {
    /// The string rendered into the `type` key of a generated property.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Object => "object",
        }
    }
}

/// Documentation metadata attached to a single field of a single DTO type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMetadata {
    pub description: Option<String>,
    pub example: Option<String>,
}

/// Compile-time descriptor for one documented DTO field.
///
/// Emitted by `#[derive(DtoSchema)]` in field declaration order; can also be
/// written by hand for types that implement [`DtoSchema`] manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: Option<&'static str>,
    pub example: Option<&'static str>,
}

/// Trait for DTO types whose fields are documented for schema generation.
///
/// Usually implemented via `#[derive(DtoSchema)]`. A manual impl only needs
/// the type name and the ordered field descriptors; [`DtoSchema::register`]
/// feeds them into a [`PropertyRegistry`].
pub trait DtoSchema {
    /// The registry key (typically the type name, e.g. `"UserDto"`).
    fn dto_name() -> &'static str;

    /// Documented fields in declaration order.
    fn fields() -> &'static [FieldSpec];

    /// Register this type's fields in the given registry.
    fn register(registry: &mut PropertyRegistry)
    where
        Self: Sized,
    {
        registry.register::<Self>();
    }
}

#[derive(Debug, Clone, Default)]
struct FieldEntry {
    kind: Option<FieldKind>,
    metadata: PropertyMetadata,
}

#[derive(Debug, Clone, Default)]
struct TypeEntry {
    ordered: Vec<String>,
    fields: HashMap<String, FieldEntry>,
}

/// Registry mapping DTO type names to their documented fields.
///
/// Created explicitly by the caller and populated once at startup (one
/// [`register`](PropertyRegistry::register) call per DTO type), then read by
/// every generation call. Type names must be unique across all registered
/// DTOs; re-registering a name replaces the previous entry and logs a
/// warning.
#[derive(Debug, Clone, Default)]
pub struct PropertyRegistry {
    types: HashMap<String, TypeEntry>,
}

impl PropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a documented field for `type_name`, appending it to the
    /// type's ordered field list.
    ///
    /// Registering the same field twice does not duplicate the list entry;
    /// the stored kind and description are replaced.
    pub fn register_property(
        &mut self,
        type_name: &str,
        field_name: &str,
        kind: FieldKind,
        description: Option<&str>,
    ) {
        let entry = self.types.entry(type_name.to_string()).or_default();
        if entry.ordered.iter().any(|name| name == field_name) {
            debug!(
                dto = type_name,
                field = field_name,
                "duplicate property registration, replacing stored metadata"
            );
        } else {
            entry.ordered.push(field_name.to_string());
        }
        let field = entry.fields.entry(field_name.to_string()).or_default();
        field.kind = Some(kind);
        field.metadata.description = description.map(str::to_string);
    }

    /// Attach example text to a field, independently of property
    /// registration. An example on a field that was never registered as a
    /// property is stored but never rendered.
    pub fn register_example(&mut self, type_name: &str, field_name: &str, example: &str) {
        let entry = self.types.entry(type_name.to_string()).or_default();
        let field = entry.fields.entry(field_name.to_string()).or_default();
        field.metadata.example = Some(example.to_string());
    }

    /// Register every field descriptor of `T` under `T::dto_name()`.
    pub fn register<T: DtoSchema>(&mut self) {
        let name = T::dto_name();
        if let Some(previous) = self.types.remove(name) {
            warn!(
                dto = name,
                replaced_fields = previous.ordered.len(),
                "DTO type name registered twice, previous field list is replaced"
            );
        }
        for field in T::fields() {
            self.register_property(name, field.name, field.kind, field.description);
            if let Some(example) = field.example {
                self.register_example(name, field.name, example);
            }
        }
    }

    /// Field names of `type_name` in registration order; empty for unknown
    /// types.
    pub fn ordered_fields(&self, type_name: &str) -> &[String] {
        self.types
            .get(type_name)
            .map(|entry| entry.ordered.as_slice())
            .unwrap_or(&[])
    }

    /// Stored metadata for a field, if any.
    pub fn metadata(&self, type_name: &str, field_name: &str) -> Option<&PropertyMetadata> {
        self.types
            .get(type_name)
            .and_then(|entry| entry.fields.get(field_name))
            .map(|field| &field.metadata)
    }

    /// Stored example text for a field, if any.
    pub fn example(&self, type_name: &str, field_name: &str) -> Option<&str> {
        self.metadata(type_name, field_name)
            .and_then(|metadata| metadata.example.as_deref())
    }

    /// The kind recorded for a field by property registration.
    pub fn kind(&self, type_name: &str, field_name: &str) -> Option<FieldKind> {
        self.types
            .get(type_name)
            .and_then(|entry| entry.fields.get(field_name))
            .and_then(|field| field.kind)
    }

    /// Whether any field of `type_name` has been registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }
}
