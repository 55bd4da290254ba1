use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{punctuated::Punctuated, Expr, Token};

/// A component of a model along with the inclusive range it is clamped to.
struct Channel {
    ident: syn::Ident,
    min: Expr,
    max: Expr,
}

/// Generate the component-wise boilerplate for a color model.
///
/// Every field must be a `Component` and carry a `#[range(min, max)]`
/// attribute. The fields are made public and the model gets `new`,
/// `clamped`, `clamp`, `round`, `to_components`, one `with_<field>` setter
/// per field and a `From<[Component; N]>` implementation.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    match expand(&mut input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &mut syn::ItemStruct) -> syn::Result<TokenStream2> {
    let syn::Fields::Named(ref mut named) = input.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Models must use named fields, one for each component of the color.",
        ));
    };

    if !(3..=4).contains(&named.named.len()) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Models must have 3 or 4 fields, one for each component of the color.",
        ));
    }

    let mut channels = Vec::with_capacity(named.named.len());

    for field in named.named.iter_mut() {
        // Make sure the fields are public.
        field.vis = syn::Visibility::Public(Default::default());

        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(&*field, "expected a named field"));
        };

        let Some(position) = field.attrs.iter().position(|a| a.path().is_ident("range")) else {
            return Err(syn::Error::new_spanned(
                &ident,
                "Each component needs a #[range(min, max)] attribute.",
            ));
        };

        let attr = field.attrs.remove(position);
        let bounds = attr.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)?;
        let mut bounds = bounds.into_iter();

        let (Some(min), Some(max), None) = (bounds.next(), bounds.next(), bounds.next()) else {
            return Err(syn::Error::new_spanned(attr, "expected #[range(min, max)]"));
        };

        channels.push(Channel { ident, min, max });
    }

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let name = &input.ident;
    let count = channels.len();
    let idents = channels.iter().map(|c| &c.ident).collect::<Vec<_>>();
    let mins = channels.iter().map(|c| &c.min).collect::<Vec<_>>();
    let maxs = channels.iter().map(|c| &c.max).collect::<Vec<_>>();
    let indices = (0..count).map(syn::Index::from).collect::<Vec<_>>();

    let setters = channels.iter().map(|Channel { ident, min, max }| {
        let setter = format_ident!("with_{}", ident);
        let doc = format!(
            "Return a copy with `{}` set to `value`, clamped to its valid range.",
            ident
        );
        quote! {
            #[doc = #doc]
            pub fn #setter(&self, value: crate::color::Component) -> Self {
                Self {
                    #ident: crate::math::clamp(value, #min, #max),
                    ..*self
                }
            }
        }
    });

    Ok(quote! {
        #input

        impl #name {
            /// Create a new model from its components. No clamping is done.
            pub const fn new(#(#idents: crate::color::Component),*) -> Self {
                Self { #(#idents),* }
            }

            /// Create a new model with every component clamped to its valid
            /// range.
            pub fn clamped(#(#idents: crate::color::Component),*) -> Self {
                Self::new(#(#idents),*).clamp()
            }

            /// Return a copy with every component clamped to its valid range.
            /// NaN components are set to the lower bound.
            pub fn clamp(&self) -> Self {
                Self {
                    #(#idents: crate::math::clamp(self.#idents, #mins, #maxs),)*
                }
            }

            /// Return a copy with every component rounded to the nearest
            /// integer.
            pub fn round(&self) -> Self {
                // Adding zero turns a negative zero into a positive one.
                Self {
                    #(#idents: self.#idents.round() + 0.0,)*
                }
            }

            /// Return the components in declaration order.
            pub fn to_components(&self) -> [crate::color::Component; #count] {
                [#(self.#idents),*]
            }

            #(#setters)*
        }

        impl From<[crate::color::Component; #count]> for #name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                Self::new(#(value[#indices]),*)
            }
        }
    })
}
