use c2s_core::{SchemaConfig, SchemaError};
use serde_json::json;

#[test]
fn default_config_is_empty() {
    let config = SchemaConfig::default();
    assert!(config.request_body_schema.is_none());
    assert!(config.find_one_response_schema.is_none());
    assert!(config.error_response_schema.is_none());
}

#[test]
fn builder_methods_set_individual_skeletons() {
    let config = SchemaConfig::default()
        .with_request_body_schema(json!({ "type": "object" }))
        .with_error_response_schema(json!({ "properties": {} }));

    assert_eq!(config.request_body_schema, Some(json!({ "type": "object" })));
    assert_eq!(config.error_response_schema, Some(json!({ "properties": {} })));
    assert!(config.update_success_response_schema.is_none());
}

#[test]
fn parses_a_json_document_with_camel_case_keys() {
    let document = r#"{
        "requestBodySchema": { "type": "object" },
        "findOneResponseSchema": { "properties": { "injectClassHere": true } },
        "updateSuccessResponseSchema": { "ok": true }
    }"#;

    let config = SchemaConfig::from_json_str(document).unwrap();
    assert_eq!(config.request_body_schema, Some(json!({ "type": "object" })));
    assert!(config.find_one_response_schema.is_some());
    assert_eq!(config.update_success_response_schema, Some(json!({ "ok": true })));
    assert!(config.delete_success_response_schema.is_none());
}

#[test]
fn parses_a_yaml_document() {
    let document = r#"
findManyResponseSchema:
  type: object
  properties:
    data:
      type: array
      items:
        type: object
errorResponseSchema:
  properties:
    error:
      properties:
        injectClassHere: true
"#;

    let config = SchemaConfig::from_yaml_str(document).unwrap();
    let find_many = config.find_many_response_schema.unwrap();
    assert_eq!(find_many["properties"]["data"]["type"], "array");
    let error = config.error_response_schema.unwrap();
    assert_eq!(
        error["properties"]["error"]["properties"]["injectClassHere"],
        json!(true)
    );
}

#[test]
fn malformed_json_surfaces_a_parse_error() {
    let err = SchemaConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, SchemaError::ConfigParse(_)));
}

#[test]
fn malformed_yaml_surfaces_a_parse_error() {
    let err = SchemaConfig::from_yaml_str(": {{ nope").unwrap_err();
    assert!(matches!(err, SchemaError::ConfigParse(_)));
}

#[test]
fn unknown_keys_are_ignored() {
    let config = SchemaConfig::from_json_str(r#"{ "somethingElse": 1 }"#).unwrap();
    assert!(config.request_body_schema.is_none());
}
