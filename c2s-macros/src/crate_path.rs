//! Crate path resolution for generated code.
//!
//! Detects whether the user depends on `c2s` (facade) or `c2s-core`
//! directly, and returns the appropriate path prefix for generated code.

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;

/// Returns the token stream for accessing `c2s_core` types.
///
/// If the user depends on `c2s`, returns `::c2s`.
/// Otherwise returns `::c2s_core`.
pub fn c2s_core_path() -> TokenStream {
    // First check if the facade crate is available
    if let Ok(found) = crate_name("c2s") {
        match found {
            FoundCrate::Itself => quote!(crate),
            FoundCrate::Name(name) => {
                let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
                quote!(::#ident)
            }
        }
    } else if let Ok(found) = crate_name("c2s-core") {
        match found {
            FoundCrate::Itself => quote!(crate),
            FoundCrate::Name(name) => {
                let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
                quote!(::#ident)
            }
        }
    } else {
        // Fallback - assume c2s_core is available (for error messages)
        quote!(::c2s_core)
    }
}
