//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

mod attrs;

use attrs::FieldAttr;

/// `EnvBind` derive macro
///
/// Implements the field-visiting capability that `envbind::bind` and
/// `envbind::bind_with` drive.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env("NAME, require=<bool>, default=<text>")]`: bind this field;
///   the string is the runtime binding annotation
/// - `#[env(nested)]`: recurse into a nested record without extending the
///   environment-name prefix
/// - `#[env(nested = "NAME")]`: recurse, with `NAME` as a prefix segment
///   for every descendant variable
///
/// Fields without an `#[env(...)]` attribute are skipped entirely.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_env_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvBind only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(input, "EnvBind only supports structs"));
        }
    };

    // Generate one walk step per annotated field
    let mut steps = Vec::new();
    for field in fields {
        let Some(attr) = FieldAttr::from_field(field)? else {
            continue;
        };
        let ident = field.ident.as_ref().unwrap();
        let field_name = ident.to_string();

        match attr {
            FieldAttr::Nested(segment) => {
                let segment = match &segment {
                    Some(name) => quote!(::core::option::Option::Some(#name)),
                    None => quote!(::core::option::Option::None),
                };
                steps.push(quote! {
                    ::envbind::EnvBind::collect(
                        &mut self.#ident,
                        &::std::format!("{}.{}", path, #field_name),
                        &::envbind::compose_prefix(prefix, #segment),
                        env,
                        plan,
                    )?;
                });
            }
            FieldAttr::Leaf(annotation) => {
                let slot = if supported_leaf(&field.ty) {
                    quote!(::envbind::Slot::Typed(&mut self.#ident))
                } else {
                    let declared = type_label(&field.ty);
                    quote!(::envbind::Slot::Unsupported(#declared))
                };
                steps.push(quote! {
                    plan.leaf(
                        &::std::format!("{}.{}", path, #field_name),
                        #annotation,
                        prefix,
                        env,
                        #slot,
                    )?;
                });
            }
        }
    }

    let type_name = struct_name.to_string();
    Ok(quote! {
        impl ::envbind::EnvBind for #struct_name {
            const TYPE_NAME: &'static str = #type_name;

            fn collect<'a>(
                &'a mut self,
                path: &str,
                prefix: &str,
                env: &::envbind::Snapshot,
                plan: &mut ::envbind::BindingPlan<'a>,
            ) -> ::core::result::Result<(), ::envbind::BindError> {
                #(#steps)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

const SCALARS: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize", "f32", "f64", "bool",
    "String",
];

/// Whether a leaf field's declared type belongs to the supported
/// scalar/sequence set. Anything else still walks (annotation parsing and
/// required checks apply), but binding it reports an unsupported-type
/// error naming the field.
fn supported_leaf(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    let Some(segment) = type_path.path.segments.last() else {
        return false;
    };

    if segment.arguments.is_none() {
        return SCALARS.contains(&segment.ident.to_string().as_str());
    }

    // Vec<scalar>
    if segment.ident != "Vec" {
        return false;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    });
    let (Some(Type::Path(elem)), None) = (types.next(), types.next()) else {
        return false;
    };
    elem.path.segments.last().is_some_and(|last| {
        last.arguments.is_none() && SCALARS.contains(&last.ident.to_string().as_str())
    })
}

/// The declared type as written, for unsupported-type diagnostics.
fn type_label(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}
