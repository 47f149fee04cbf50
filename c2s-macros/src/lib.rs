extern crate proc_macro;
use proc_macro::TokenStream;

pub(crate) mod crate_path;
pub(crate) mod dto_schema_derive;

/// Derive macro for documenting a DTO struct's fields for schema
/// generation.
///
/// Only works on structs with named fields. Undecorated fields are invisible
/// to the generated schema.
///
/// # Field attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[property]` | Mark the field as documented, with no description |
/// | `#[property(description = "...")]` | Mark the field as documented, with a description |
/// | `#[example("...")]` | Attach example text. Inert without `#[property]`. |
///
/// The OpenAPI `type` of each property is inferred from the declared field
/// type: string types map to `"string"`, numeric primitives to `"integer"`,
/// `bool` to `"boolean"`, everything else to `"object"`. `Option<T>` maps
/// to whatever `T` maps to.
///
/// # Example
///
/// ```ignore
/// use c2s::prelude::*;
///
/// #[derive(DtoSchema)]
/// pub struct RegisterUserRequestDto {
///     #[property(description = "Username of user")]
///     #[example("my_user_name_is_cool_123")]
///     username: String,
///
///     #[property(description = "Password of user")]
///     password: String,
/// }
/// ```
///
/// # What is generated
///
/// An `impl DtoSchema` with the type name as `dto_name()` and a `const`
/// slice of `FieldSpec` descriptors in declaration order — no runtime
/// reflection. Generated code references `::c2s` when the user depends on
/// the facade crate, `::c2s_core` otherwise.
#[proc_macro_derive(DtoSchema, attributes(property, example))]
pub fn derive_dto_schema(input: TokenStream) -> TokenStream {
    dto_schema_derive::expand(input)
}
