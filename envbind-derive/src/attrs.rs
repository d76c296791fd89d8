//! Attribute parsing

use syn::{Field, LitStr};

/// Parsed `#[env(...)]` attribute of one field
#[derive(Debug, PartialEq, Eq)]
pub enum FieldAttr {
    /// `#[env("NAME, require=..., default=...")]`: leaf binding; the
    /// annotation string is passed through to the runtime parser verbatim.
    Leaf(String),
    /// `#[env(nested)]` / `#[env(nested = "NAME")]`: recurse into a nested
    /// record, optionally contributing a prefix segment.
    Nested(Option<String>),
}

impl FieldAttr {
    /// Parse the `#[env(...)]` attribute from a field, if any.
    pub fn from_field(field: &Field) -> syn::Result<Option<Self>> {
        let mut found = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }
            if found.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate #[env] attribute"));
            }

            // #[env("...")] - a leaf binding annotation
            if let Ok(annotation) = attr.parse_args::<LitStr>() {
                found = Some(FieldAttr::Leaf(annotation.value()));
                continue;
            }

            // #[env(nested)] or #[env(nested = "NAME")]
            let mut nested = None;
            let mut seen = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("nested") {
                    if seen {
                        return Err(meta.error("duplicate `nested`"));
                    }
                    seen = true;
                    if meta.input.peek(syn::Token![=]) {
                        let value = meta.value()?;
                        let name: LitStr = value.parse()?;
                        nested = Some(name.value());
                    }
                    return Ok(());
                }

                Err(meta.error("expected a binding annotation string or `nested`"))
            })?;
            if !seen {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected a binding annotation string or `nested`",
                ));
            }
            found = Some(FieldAttr::Nested(nested));
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_leaf_annotation() {
        let field: Field = parse_quote! {
            #[env("TOKEN_ID, require=true, default=66")]
            pub id: i64
        };

        let attr = FieldAttr::from_field(&field).unwrap();
        assert_eq!(
            attr,
            Some(FieldAttr::Leaf(
                "TOKEN_ID, require=true, default=66".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_nested_without_name() {
        let field: Field = parse_quote! {
            #[env(nested)]
            pub inner: Inner
        };

        let attr = FieldAttr::from_field(&field).unwrap();
        assert_eq!(attr, Some(FieldAttr::Nested(None)));
    }

    #[test]
    fn test_parse_nested_with_name() {
        let field: Field = parse_quote! {
            #[env(nested = "PRIMARY")]
            pub endpoint1: Endpoint
        };

        let attr = FieldAttr::from_field(&field).unwrap();
        assert_eq!(attr, Some(FieldAttr::Nested(Some("PRIMARY".to_string()))));
    }

    #[test]
    fn test_unannotated_field() {
        let field: Field = parse_quote! {
            pub surname: String
        };

        let attr = FieldAttr::from_field(&field).unwrap();
        assert_eq!(attr, None);
    }

    #[test]
    fn test_other_attributes_are_skipped() {
        let field: Field = parse_quote! {
            #[serde(rename = "id")]
            pub id: i64
        };

        let attr = FieldAttr::from_field(&field).unwrap();
        assert_eq!(attr, None);
    }

    #[test]
    fn test_unsupported_meta_is_an_error() {
        let field: Field = parse_quote! {
            #[env(name = "TOKEN_ID")]
            pub id: i64
        };

        assert!(FieldAttr::from_field(&field).is_err());
    }

    #[test]
    fn test_empty_attribute_is_an_error() {
        let field: Field = parse_quote! {
            #[env()]
            pub id: i64
        };

        assert!(FieldAttr::from_field(&field).is_err());
    }

    #[test]
    fn test_duplicate_attribute_is_an_error() {
        let field: Field = parse_quote! {
            #[env("TOKEN_ID")]
            #[env("TOKEN_VALUE")]
            pub id: i64
        };

        assert!(FieldAttr::from_field(&field).is_err());
    }
}
