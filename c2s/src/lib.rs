//! c2s — Swagger/OpenAPI schema fragments from annotated DTOs.
//!
//! This facade crate re-exports `c2s-core` and the `DtoSchema` derive
//! through a single dependency. Import everything you need with:
//!
//! ```ignore
//! use c2s::prelude::*;
//! ```
//!
//! # Feature flags
//!
//! | Feature  | Default | Crate        |
//! |----------|---------|--------------|
//! | `derive` | **yes** | `c2s-macros` |
//!
//! # Example
//!
//! ```ignore
//! use c2s::prelude::*;
//! use serde_json::json;
//!
//! #[derive(DtoSchema)]
//! struct RegisterUserRequestDto {
//!     #[property(description = "Username of user")]
//!     #[example("my_user_name_is_cool_123")]
//!     username: String,
//!
//!     #[property(description = "Password of user")]
//!     password: String,
//! }
//!
//! let mut registry = PropertyRegistry::new();
//! registry.register::<RegisterUserRequestDto>();
//!
//! let mut generator = SchemaGenerator::new();
//! generator.set_request_body_schema(json!({ "type": "object" }));
//!
//! let fragment = generator.generate_request_body::<RegisterUserRequestDto>(&registry)?;
//! ```

// Re-export the core crate as a public module so it's accessible as
// `c2s::c2s_core`.
//
// The derive macro uses `proc-macro-crate` to detect whether the user
// depends on `c2s` (facade) or `c2s-core` directly, and generates the
// correct paths.
pub extern crate c2s_core;

// Re-export everything from c2s-core at the top level for convenience.
pub use c2s_core::*;

#[cfg(feature = "derive")]
pub use c2s_macros;

/// The `DtoSchema` derive macro.
#[cfg(feature = "derive")]
pub use c2s_macros::DtoSchema;

pub mod prelude {
    //! c2s prelude — core types plus the derive macro.

    pub use c2s_core::prelude::*;

    #[cfg(feature = "derive")]
    pub use c2s_macros::DtoSchema;
}
