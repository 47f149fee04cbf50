//! c2s prelude — import everything you need with a single `use`.
//!
//! ```ignore
//! use c2s_core::prelude::*;
//!
//! let mut registry = PropertyRegistry::new();
//! UserDto::register(&mut registry);
//!
//! let mut generator = SchemaGenerator::new();
//! generator.configure(SchemaConfig::from_yaml_str(&skeletons)?);
//!
//! let fragment = generator.generate_find_one_response::<UserDto>(&registry)?;
//! ```

pub use crate::error::SchemaError;
pub use crate::generator::{ErrorDetail, SchemaConfig, SchemaGenerator};
pub use crate::inject::Marker;
pub use crate::registry::{DtoSchema, FieldKind, FieldSpec, PropertyMetadata, PropertyRegistry};
