use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_injectable_impl(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn generate_injectable_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => {
                return Ok(quote! {
                    impl #impl_generics ::school_report::Injectable for #struct_name #ty_generics #where_clause {
                        fn inject(
                            _container: &::school_report::Container
                        ) -> ::school_report::Result<Self> {
                            Ok(Self)
                        }
                    }
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new(
                    input.span(),
                    "#[derive(Injectable)] only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                input.span(),
                "#[derive(Injectable)] can only be applied to structs",
            ));
        }
    };

    let mut field_injections = Vec::with_capacity(fields.len());
    for field in fields {
        let field_name = &field.ident;
        let field_type = extract_arc_inner(&field.ty).ok_or_else(|| {
            syn::Error::new(
                field.ty.span(),
                "injectable fields must be `Arc<T>` or `Arc<dyn Trait>`",
            )
        })?;

        // syn parses `dyn Trait` as a TraitObject
        let resolve_method = match &field_type {
            Type::TraitObject(_) => quote!(resolve_trait),
            _ => quote!(resolve),
        };

        field_injections.push(quote! {
            #field_name: container.#resolve_method::<#field_type>()?
        });
    }

    Ok(quote! {
        impl #impl_generics ::school_report::Injectable for #struct_name #ty_generics #where_clause {
            fn inject(
                container: &::school_report::Container
            ) -> ::school_report::Result<Self> {
                Ok(Self {
                    #(#field_injections),*
                })
            }
        }
    })
}

/// Returns `T` for a field typed `Arc<T>` (including `Arc<dyn Trait>`).
fn extract_arc_inner(ty: &Type) -> Option<Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Arc" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner_type) => Some(inner_type.clone()),
        _ => None,
    }
}
