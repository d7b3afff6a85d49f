mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `verbatim_error::ErrorKind` trait for the given struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use verbatim_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = format!("expected `{}`", expected), labels = ["opened here"])]
/// pub struct Unclosed {
///     expected: char,
/// }
///
/// use verbatim_error::ErrorKind as _;
/// assert_eq!(Unclosed { expected: ')' }.message(), "expected `)`");
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The text of the labels that point to each span of the error.                 |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
/// | `note`      | Optional note with extra context about the error.                            |
///
/// Each tag accepts an expression that should evaluate to something printable. For structs with
/// named fields, the expression is evaluated with the members of the struct in scope, so they can
/// be used in the expression (tuple structs are not supported).
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl verbatim_error::ErrorKind for #name {
            #target
        }
    }.into()
}
