use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::SchemaError;
use crate::inject::{inject_at_marker, Marker};
use crate::properties::dto_properties;
use crate::registry::{DtoSchema, PropertyRegistry};

const REQUEST_BODY: &str = "request body";
const FIND_ONE: &str = "find one response";
const FIND_MANY: &str = "find many response";
const FIND_MANY_PAGING: &str = "find many paging response";
const CREATE_SUCCESS: &str = "create success response";
const ERROR_RESPONSE: &str = "error response";

/// The set of base schema skeletons, one per operation kind.
///
/// Keys follow the JSON/YAML document form (`findOneResponseSchema`, ...),
/// so a full skeleton set can be deserialized from a single config document.
/// Unset skeletons default to an empty mapping.
///
/// # Example
///
/// ```ignore
/// let config = SchemaConfig::default()
///     .with_request_body_schema(json!({ "type": "object", "properties": {} }))
///     .with_error_response_schema(serde_yaml::from_str(&yaml)?);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaConfig {
    pub request_body_schema: Option<Value>,
    pub find_one_response_schema: Option<Value>,
    pub find_many_response_schema: Option<Value>,
    pub find_many_paging_response_schema: Option<Value>,
    pub create_success_response_schema: Option<Value>,
    pub update_success_response_schema: Option<Value>,
    pub delete_success_response_schema: Option<Value>,
    pub error_response_schema: Option<Value>,
}

impl SchemaConfig {
    /// Parse a skeleton set from a JSON document.
    pub fn from_json_str(document: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(document).map_err(|err| SchemaError::ConfigParse(err.to_string()))
    }

    /// Parse a skeleton set from a YAML document.
    pub fn from_yaml_str(document: &str) -> Result<Self, SchemaError> {
        serde_yaml::from_str(document).map_err(|err| SchemaError::ConfigParse(err.to_string()))
    }

    pub fn with_request_body_schema(mut self, schema: Value) -> Self {
        self.request_body_schema = Some(schema);
        self
    }

    pub fn with_find_one_response_schema(mut self, schema: Value) -> Self {
        self.find_one_response_schema = Some(schema);
        self
    }

    pub fn with_find_many_response_schema(mut self, schema: Value) -> Self {
        self.find_many_response_schema = Some(schema);
        self
    }

    pub fn with_find_many_paging_response_schema(mut self, schema: Value) -> Self {
        self.find_many_paging_response_schema = Some(schema);
        self
    }

    pub fn with_create_success_response_schema(mut self, schema: Value) -> Self {
        self.create_success_response_schema = Some(schema);
        self
    }

    pub fn with_update_success_response_schema(mut self, schema: Value) -> Self {
        self.update_success_response_schema = Some(schema);
        self
    }

    pub fn with_delete_success_response_schema(mut self, schema: Value) -> Self {
        self.delete_success_response_schema = Some(schema);
        self
    }

    pub fn with_error_response_schema(mut self, schema: Value) -> Self {
        self.error_response_schema = Some(schema);
        self
    }
}

/// Error values injected into the error response skeleton. Supplied per
/// generation call, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub message: String,
    pub code: Option<String>,
    pub http_status_code: Option<u16>,
    pub http_status_message: Option<String>,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            http_status_code: None,
            http_status_message: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_http_status_code(mut self, status: u16) -> Self {
        self.http_status_code = Some(status);
        self
    }

    pub fn with_http_status_message(mut self, message: impl Into<String>) -> Self {
        self.http_status_message = Some(message.into());
        self
    }
}

/// Generates schema fragments by splicing DTO properties into configured
/// skeletons.
///
/// Skeletons are immutable templates: every `generate_*` call deep-copies
/// the stored skeleton before injection, so repeated calls are independent
/// and the caller owns each returned fragment outright.
#[derive(Debug, Clone)]
pub struct SchemaGenerator {
    request_body_schema: Value,
    find_one_response_schema: Value,
    find_many_response_schema: Value,
    find_many_paging_response_schema: Value,
    create_success_response_schema: Value,
    update_success_response_schema: Value,
    delete_success_response_schema: Value,
    error_response_schema: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaGenerator {
    /// Create a generator with every skeleton set to an empty mapping.
    pub fn new() -> Self {
        Self {
            request_body_schema: empty_object(),
            find_one_response_schema: empty_object(),
            find_many_response_schema: empty_object(),
            find_many_paging_response_schema: empty_object(),
            create_success_response_schema: empty_object(),
            update_success_response_schema: empty_object(),
            delete_success_response_schema: empty_object(),
            error_response_schema: empty_object(),
        }
    }

    /// Install a full skeleton set. Absent skeletons reset to an empty
    /// mapping.
    pub fn configure(&mut self, config: SchemaConfig) {
        debug!(
            request_body = config.request_body_schema.is_some(),
            find_one = config.find_one_response_schema.is_some(),
            find_many = config.find_many_response_schema.is_some(),
            find_many_paging = config.find_many_paging_response_schema.is_some(),
            create_success = config.create_success_response_schema.is_some(),
            update_success = config.update_success_response_schema.is_some(),
            delete_success = config.delete_success_response_schema.is_some(),
            error = config.error_response_schema.is_some(),
            "configuring schema generator"
        );
        self.request_body_schema = config.request_body_schema.unwrap_or_else(empty_object);
        self.find_one_response_schema = config.find_one_response_schema.unwrap_or_else(empty_object);
        self.find_many_response_schema =
            config.find_many_response_schema.unwrap_or_else(empty_object);
        self.find_many_paging_response_schema = config
            .find_many_paging_response_schema
            .unwrap_or_else(empty_object);
        self.create_success_response_schema = config
            .create_success_response_schema
            .unwrap_or_else(empty_object);
        self.update_success_response_schema = config
            .update_success_response_schema
            .unwrap_or_else(empty_object);
        self.delete_success_response_schema = config
            .delete_success_response_schema
            .unwrap_or_else(empty_object);
        self.error_response_schema = config.error_response_schema.unwrap_or_else(empty_object);
    }

    pub fn set_request_body_schema(&mut self, schema: Value) {
        self.request_body_schema = schema;
    }

    pub fn set_find_one_response_schema(&mut self, schema: Value) {
        self.find_one_response_schema = schema;
    }

    pub fn set_find_many_response_schema(&mut self, schema: Value) {
        self.find_many_response_schema = schema;
    }

    pub fn set_find_many_paging_response_schema(&mut self, schema: Value) {
        self.find_many_paging_response_schema = schema;
    }

    pub fn set_create_success_response_schema(&mut self, schema: Value) {
        self.create_success_response_schema = schema;
    }

    pub fn set_update_success_response_schema(&mut self, schema: Value) {
        self.update_success_response_schema = schema;
    }

    pub fn set_delete_success_response_schema(&mut self, schema: Value) {
        self.delete_success_response_schema = schema;
    }

    pub fn set_error_response_schema(&mut self, schema: Value) {
        self.error_response_schema = schema;
    }

    /// Convert a DTO to a request body schema: the generated properties are
    /// assigned to the skeleton's top-level `properties` key.
    pub fn generate_request_body<T: DtoSchema>(
        &self,
        registry: &PropertyRegistry,
    ) -> Result<Value, SchemaError> {
        let properties = dto_properties(registry, T::dto_name());
        let mut fragment = self.request_body_schema.clone();
        let root = fragment
            .as_object_mut()
            .ok_or(SchemaError::NotAnObject { kind: REQUEST_BODY })?;
        root.insert("properties".to_string(), Value::Object(properties));
        Ok(fragment)
    }

    /// Convert a DTO to a find one response schema via class-marker
    /// injection.
    pub fn generate_find_one_response<T: DtoSchema>(
        &self,
        registry: &PropertyRegistry,
    ) -> Result<Value, SchemaError> {
        inject_class(
            &self.find_one_response_schema,
            dto_properties(registry, T::dto_name()),
            FIND_ONE,
        )
    }

    /// Convert a DTO to a create success response schema via class-marker
    /// injection.
    pub fn generate_create_success_response<T: DtoSchema>(
        &self,
        registry: &PropertyRegistry,
    ) -> Result<Value, SchemaError> {
        inject_class(
            &self.create_success_response_schema,
            dto_properties(registry, T::dto_name()),
            CREATE_SUCCESS,
        )
    }

    /// Convert a DTO to a find many response schema. The properties land at
    /// the fixed path `properties.data.items.properties`.
    pub fn generate_find_many_response<T: DtoSchema>(
        &self,
        registry: &PropertyRegistry,
    ) -> Result<Value, SchemaError> {
        let properties = dto_properties(registry, T::dto_name());
        let mut fragment = self.find_many_response_schema.clone();
        let items = fragment
            .pointer_mut("/properties/data/items")
            .and_then(Value::as_object_mut)
            .ok_or(SchemaError::MissingPath {
                kind: FIND_MANY,
                path: "properties.data.items",
            })?;
        items.insert("properties".to_string(), Value::Object(properties));
        Ok(fragment)
    }

    /// Convert a DTO to a paged find many response schema. The properties
    /// land at the fixed path `properties.data.properties.items.items.properties`.
    pub fn generate_find_many_paging_response<T: DtoSchema>(
        &self,
        registry: &PropertyRegistry,
    ) -> Result<Value, SchemaError> {
        let properties = dto_properties(registry, T::dto_name());
        let mut fragment = self.find_many_paging_response_schema.clone();
        let items = fragment
            .pointer_mut("/properties/data/properties/items/items")
            .and_then(Value::as_object_mut)
            .ok_or(SchemaError::MissingPath {
                kind: FIND_MANY_PAGING,
                path: "properties.data.properties.items.items",
            })?;
        items.insert("properties".to_string(), Value::Object(properties));
        Ok(fragment)
    }

    /// The configured update success skeleton, copied verbatim.
    pub fn generate_update_success_response(&self) -> Result<Value, SchemaError> {
        Ok(self.update_success_response_schema.clone())
    }

    /// The configured delete success skeleton, copied verbatim.
    pub fn generate_delete_success_response(&self) -> Result<Value, SchemaError> {
        Ok(self.delete_success_response_schema.clone())
    }

    /// Inject error values into the error response skeleton.
    ///
    /// The class marker receives a `{ message, code? }` property object; the
    /// status markers receive the bare status code and message. Optional
    /// pieces are only injected when supplied, but a supplied piece whose
    /// marker is absent from the skeleton is a structural error.
    pub fn generate_error_response(&self, detail: ErrorDetail) -> Result<Value, SchemaError> {
        let mut error_properties = Map::new();
        error_properties.insert(
            "message".to_string(),
            json!({
                "type": "string",
                "description": "Error message",
                "example": detail.message,
            }),
        );
        if let Some(code) = &detail.code {
            error_properties.insert(
                "code".to_string(),
                json!({
                    "type": "string",
                    "description": "Error code",
                    "example": code,
                }),
            );
        }

        let mut fragment = self.error_response_schema.clone();
        if !inject_at_marker(&mut fragment, Marker::Class, &Value::Object(error_properties)) {
            return Err(SchemaError::MarkerNotFound {
                kind: ERROR_RESPONSE,
                marker: Marker::Class,
            });
        }
        if let Some(status) = detail.http_status_code {
            if !inject_at_marker(&mut fragment, Marker::HttpStatusExample, &json!(status)) {
                return Err(SchemaError::MarkerNotFound {
                    kind: ERROR_RESPONSE,
                    marker: Marker::HttpStatusExample,
                });
            }
        }
        if let Some(message) = &detail.http_status_message {
            if !inject_at_marker(&mut fragment, Marker::HttpMessageExample, &json!(message)) {
                return Err(SchemaError::MarkerNotFound {
                    kind: ERROR_RESPONSE,
                    marker: Marker::HttpMessageExample,
                });
            }
        }
        Ok(fragment)
    }
}

fn inject_class(
    skeleton: &Value,
    properties: Map<String, Value>,
    kind: &'static str,
) -> Result<Value, SchemaError> {
    let mut fragment = skeleton.clone();
    if !inject_at_marker(&mut fragment, Marker::Class, &Value::Object(properties)) {
        return Err(SchemaError::MarkerNotFound {
            kind,
            marker: Marker::Class,
        });
    }
    Ok(fragment)
}
