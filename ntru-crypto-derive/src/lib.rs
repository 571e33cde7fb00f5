//! Derive macros used by `ntru-crypto` to keep private key material out of formatted output.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Path, parse_macro_input, parse_quote};

// DERIVES
// ================================================================================================

/// Derives a `Debug` implementation that prints `<elided secret for TypeName>` in place of the
/// field values.
///
/// # Example
///
/// ```ignore
/// #[derive(SilentDebug)]
/// pub struct PrivateKey {
///     f: IntPolynomial,
/// }
///
/// assert_eq!(format!("{key:?}"), "<elided secret for PrivateKey>");
/// ```
#[proc_macro_derive(SilentDebug)]
pub fn silent_debug(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    elided_formatter(&ast, parse_quote!(::core::fmt::Debug))
}

/// Derives a `Display` implementation with the same elided output as [`SilentDebug`].
///
/// Secret types rarely need `Display`, but some generic code (error wrappers, log adapters)
/// requires it.
#[proc_macro_derive(SilentDisplay)]
pub fn silent_display(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    elided_formatter(&ast, parse_quote!(::core::fmt::Display))
}

// HELPERS
// ================================================================================================

/// Implements the formatting trait `fmt_trait` for the derive input so that it writes only the
/// type name.
fn elided_formatter(ast: &DeriveInput, fmt_trait: Path) -> TokenStream {
    let name = &ast.ident;
    let label = format!("<elided secret for {name}>");
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #fmt_trait for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#label)
            }
        }
    };

    TokenStream::from(expanded)
}
