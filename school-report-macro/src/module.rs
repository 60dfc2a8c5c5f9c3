use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, parse_macro_input, Attribute, ItemStruct, Path, Token, Type,
};

struct ModuleItem {
    attrs: Vec<Attribute>,
    path: Path,
}

impl Parse for ModuleItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let path = input.parse()?;
        Ok(ModuleItem { attrs, path })
    }
}

/// Represents a trait binding: (dyn Trait => Impl)
struct BindingItem {
    trait_type: Type,
    impl_type: Path,
}

impl Parse for BindingItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        syn::parenthesized!(content in input);

        let trait_type: Type = content.parse()?;
        content.parse::<Token![=>]>()?;
        let impl_type: Path = content.parse()?;

        Ok(BindingItem {
            trait_type,
            impl_type,
        })
    }
}

#[derive(Default)]
struct ModuleArgs {
    imports: Vec<ModuleItem>,
    providers: Vec<ModuleItem>,
    transients: Vec<ModuleItem>,
    bindings: Vec<BindingItem>,
}

impl Parse for ModuleArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = ModuleArgs::default();

        while !input.is_empty() {
            let name: syn::Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            // [Item1, Item2, ...]
            let content;
            syn::bracketed!(content in input);

            if name == "imports" {
                let items = content.parse_terminated(ModuleItem::parse, Token![,])?;
                args.imports = items.into_iter().collect();
            } else if name == "providers" {
                let items = content.parse_terminated(ModuleItem::parse, Token![,])?;
                args.providers = items.into_iter().collect();
            } else if name == "transients" {
                let items = content.parse_terminated(ModuleItem::parse, Token![,])?;
                args.transients = items.into_iter().collect();
            } else if name == "bindings" {
                let items = content.parse_terminated(BindingItem::parse, Token![,])?;
                args.bindings = items.into_iter().collect();
            } else {
                return Err(syn::Error::new(
                    name.span(),
                    format!(
                        "unknown module key `{name}`, expected one of: imports, providers, transients, bindings"
                    ),
                ));
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}

pub fn module_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ModuleArgs);
    let input = parse_macro_input!(item as ItemStruct);
    let expanded = generate_module_impl(&args, &input);

    TokenStream::from(expanded)
}

fn generate_module_impl(args: &ModuleArgs, input: &ItemStruct) -> TokenStream2 {
    let module_name = &input.ident;

    let import_registrations = args.imports.iter().map(|item| {
        let path = &item.path;
        let attrs = &item.attrs;
        quote! {
            #(#attrs)*
            let builder = <#path as ::school_report::Module>::register(builder);
        }
    });

    let binding_registrations = args.bindings.iter().map(|binding| {
        let trait_type = &binding.trait_type;
        let impl_type = &binding.impl_type;
        quote! {
            let builder = builder.bind::<#trait_type, #impl_type, _>(|i| {
                i as ::std::sync::Arc<#trait_type>
            });
        }
    });

    let singleton_registrations = args.providers.iter().map(|item| {
        let path = &item.path;
        let attrs = &item.attrs;
        quote! {
            #(#attrs)*
            let builder = builder.singleton::<#path>();
        }
    });

    let transient_registrations = args.transients.iter().map(|item| {
        let path = &item.path;
        let attrs = &item.attrs;
        quote! {
            #(#attrs)*
            let builder = builder.transient::<#path>();
        }
    });

    quote! {
        #input

        impl ::school_report::Module for #module_name {
            fn register(
                builder: ::school_report::ContainerBuilder
            ) -> ::school_report::ContainerBuilder {
                #(#import_registrations)*
                #(#binding_registrations)*
                #(#singleton_registrations)*
                #(#transient_registrations)*
                builder
            }
        }

        impl #module_name {
            /// Build a container holding only this module's registrations
            pub fn create_container() -> ::school_report::Container {
                ::school_report::ContainerBuilder::new()
                    .install::<Self>()
                    .build()
            }
        }
    }
}
