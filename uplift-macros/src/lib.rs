extern crate proc_macro;

mod uplifting;

use proc_macro::TokenStream;

/// Derives the `Uplifting` trait for a domain error type.
///
/// # Remarks
///
/// Enumerations must mark exactly one variant with `#[uplifted]`. Structures must have exactly one
/// field. Specify `#[uplifted(rewrap)]` or `#[uplifting(rewrap)]` to always wrap the underlying
/// error, even when it is already the domain error type.
#[proc_macro_derive(Uplifting, attributes(uplifted, uplifting))]
pub fn uplifting(input: TokenStream) -> TokenStream {
    uplifting::expand(input.into()).into()
}
