use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, *};

#[derive(Default)]
struct UpliftAttribute {
    rewrap: bool,
}

impl UpliftAttribute {
    fn parse(&mut self, attribute: &Attribute) -> Result<()> {
        if let Meta::Path(_) = attribute.meta {
            return Ok(());
        }

        attribute.parse_nested_meta(|args| {
            if args.path.is_ident("rewrap") {
                self.rewrap = true;
                Ok(())
            } else {
                Err(args.error("unsupported argument"))
            }
        })
    }
}

pub(crate) fn expand(input: TokenStream) -> TokenStream {
    match parse2::<DeriveInput>(input).and_then(|derive| implement(&derive)) {
        Ok(output) => output,
        Err(error) => error.to_compile_error(),
    }
}

fn implement(derive: &DeriveInput) -> Result<TokenStream> {
    let mut attribute = UpliftAttribute::default();

    for attr in derive.attrs.iter().filter(|a| a.path().is_ident("uplifting")) {
        attribute.parse(attr)?;
    }

    let wrap = match &derive.data {
        Data::Enum(enum_) => {
            let mut uplifted = None;

            for variant in &enum_.variants {
                for attr in variant.attrs.iter().filter(|a| a.path().is_ident("uplifted")) {
                    if uplifted.is_some() {
                        return Err(Error::new(variant.span(), "encountered multiple #[uplifted]"));
                    }

                    attribute.parse(attr)?;
                    uplifted = Some(variant);
                }
            }

            let Some(variant) = uplifted else {
                return Err(Error::new(
                    derive.ident.span(),
                    "expected exactly one variant marked #[uplifted]",
                ));
            };
            let name = &variant.ident;

            construct(quote! { Self::#name }, &variant.fields)?
        }
        Data::Struct(struct_) => {
            if struct_.fields.len() != 1 {
                return Err(Error::new(
                    derive.ident.span(),
                    "#[derive(Uplifting)] requires a structure with exactly one field",
                ));
            }

            construct(quote! { Self }, &struct_.fields)?
        }
        Data::Union(_) => {
            return Err(Error::new(
                derive.ident.span(),
                "#[derive(Uplifting)] cannot be applied to a union",
            ));
        }
    };

    let mut generics = derive.generics.clone();
    let body = if attribute.rewrap {
        wrap
    } else {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote! { Self: ::std::error::Error + 'static });

        quote! {
            match error.downcast::<Self>() {
                ::core::result::Result::Ok(this) => *this,
                ::core::result::Result::Err(error) => #wrap,
            }
        }
    };
    let name = &derive.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::uplift::Uplifting for #name #ty_generics #where_clause {
            fn uplifted(error: ::uplift::BoxError) -> Self {
                #body
            }
        }
    })
}

fn construct(path: TokenStream, fields: &Fields) -> Result<TokenStream> {
    match fields {
        Fields::Unit => Ok(quote! {{
            ::core::mem::drop(error);
            #path
        }}),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            Ok(quote! { #path(::core::convert::From::from(error)) })
        }
        Fields::Named(fields) if fields.named.len() == 1 => {
            let field = fields.named.first().and_then(|f| f.ident.as_ref());
            Ok(quote! { #path { #field: ::core::convert::From::from(error) } })
        }
        _ => Err(Error::new(
            fields.span(),
            "an #[uplifted] variant can have at most one field",
        )),
    }
}
