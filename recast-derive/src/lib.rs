//! `#[derive(Reflect)]` for structs with named fields.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derives `recast::Reflect` for a struct with named fields.
///
/// ```ignore
/// #[derive(Reflect)]
/// struct Account {
///     #[tag(recast = "user-name,required", json = "user")]
///     name: String,
///     #[tag(recast = "-")]
///     password: String,
///     aliases: Vec<String>,
/// }
/// ```
///
/// Every field type must implement `Reflect`. `#[tag(key = "text")]` stores an
/// annotation under `key`; the converter reads the one under its annotation key.
/// `#[reflect(anonymous)]` makes the record anonymous: it is then assignable to
/// and from any record with the same fields.
#[proc_macro_derive(Reflect, attributes(tag, reflect))]
pub fn reflect_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_reflect(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

struct ReflectField<'a> {
    ident: &'a syn::Ident,
    ty: &'a syn::Type,
    name: String,
    tags: Vec<(String, String)>,
}

fn derive_reflect(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "Reflect only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Reflect only supports structs",
            ));
        }
    };

    let mut anonymous = false;
    for attr in &input.attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("anonymous") {
                anonymous = true;
                Ok(())
            } else {
                Err(meta.error("unknown reflect attribute, expected `anonymous`"))
            }
        })?;
    }

    let fields = fields
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;

            let mut tags = Vec::new();
            for attr in &field.attrs {
                if !attr.path().is_ident("tag") {
                    continue;
                }
                attr.parse_nested_meta(|meta| {
                    let key = meta
                        .path
                        .get_ident()
                        .ok_or_else(|| meta.error("expected an annotation key"))?
                        .unraw()
                        .to_string();
                    let text: LitStr = meta.value()?.parse()?;
                    tags.push((key, text.value()));
                    Ok(())
                })?;
            }

            Ok(ReflectField {
                ident,
                ty: &field.ty,
                name: ident.unraw().to_string(),
                tags,
            })
        })
        .collect::<Result<Vec<_>, syn::Error>>()?;

    let type_name = if anonymous {
        quote! {}
    } else {
        let name = ident.unraw().to_string();
        quote! { .name(#name) }
    };

    let field_defs = fields.iter().map(|field| {
        let ReflectField { ty, name, tags, .. } = field;
        let tags = tags.iter().map(|(key, text)| quote! { .tag(#key, #text) });
        quote! {
            .field(
                ::recast::Field::builder(#name, <#ty as ::recast::Reflect>::shape())
                    #(#tags)*
                    .build()
            )
        }
    });

    let to_values = fields.iter().map(|field| {
        let field_ident = field.ident;
        quote! { ::recast::Reflect::to_value(&self.#field_ident) }
    });

    let from_values = fields.iter().map(|field| {
        let ReflectField {
            ident: field_ident,
            name,
            ..
        } = field;
        quote! { #field_ident: fields.next(#name)? }
    });

    Ok(quote! {
        const _: () = {
            static STRUCT_TYPE: ::std::sync::OnceLock<::std::sync::Arc<::recast::StructType>> =
                ::std::sync::OnceLock::new();

            fn struct_type() -> &'static ::std::sync::Arc<::recast::StructType> {
                STRUCT_TYPE.get_or_init(|| {
                    ::std::sync::Arc::new(
                        ::recast::StructType::builder()
                            #type_name
                            #(#field_defs)*
                            .build(),
                    )
                })
            }

            #[automatically_derived]
            impl ::recast::Reflect for #ident {
                fn shape() -> ::recast::Shape {
                    ::recast::Shape::struct_(::std::sync::Arc::clone(struct_type()))
                }

                fn to_value(&self) -> ::recast::Value {
                    ::recast::Value::Struct(::recast::StructValue::new(
                        ::std::sync::Arc::clone(struct_type()),
                        ::std::vec![#(#to_values),*],
                    ))
                }

                #[allow(unused_mut, unused_variables)]
                fn from_value(
                    value: ::recast::Value,
                ) -> ::core::result::Result<Self, ::recast::ValueError> {
                    let mut fields = ::recast::StructFields::new(
                        value,
                        &<Self as ::recast::Reflect>::shape(),
                    )?;
                    ::core::result::Result::Ok(Self {
                        #(#from_values),*
                    })
                }
            }
        };
    })
}
