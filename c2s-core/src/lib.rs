//! c2s core — Swagger/OpenAPI schema fragments from annotated DTOs.
//!
//! The DTO type is the single source of truth: its documented fields are
//! recorded once in a [`PropertyRegistry`], and a [`SchemaGenerator`]
//! configured with base schema skeletons splices the generated `properties`
//! mapping into the right spot of the relevant skeleton — a marker node for
//! the single-object shapes, a fixed nested path for the list shapes.
//!
//! The returned fragment is a plain `serde_json::Value`, ready to be handed
//! to whatever assembles the OpenAPI document.

pub mod error;
pub mod generator;
pub mod inject;
pub mod prelude;
pub mod properties;
pub mod registry;

pub use error::SchemaError;
pub use generator::{ErrorDetail, SchemaConfig, SchemaGenerator};
pub use inject::{inject_at_marker, Marker};
pub use properties::dto_properties;
pub use registry::{DtoSchema, FieldKind, FieldSpec, PropertyMetadata, PropertyRegistry};
