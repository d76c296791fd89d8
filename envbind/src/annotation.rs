//! Parser for the field binding annotation grammar
//!
//! An annotation is a single string of the form
//! `NAME[, require=<bool>][, default=<text>]`. The variable base name is the
//! first identifier-shaped token; the remaining clauses are `key = value`
//! pairs in any order. Unrecognized keys and text that does not form a
//! clause are skipped, so vestigial metadata (`protected=true`, trailing
//! junk) never fails a bind.

use crate::coerce::parse_bool_literal;

/// Parsed binding metadata of one field.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Annotation {
    /// Environment variable base name, before prefixing.
    pub(crate) name: String,
    /// Raw default text, exactly as written after `default=`.
    pub(crate) default: Option<String>,
    /// Whether the variable must be present in the environment.
    pub(crate) required: bool,
}

/// Parse an annotation string.
///
/// Fails only when no variable name can be extracted, or when a `require`
/// value falls outside the boolean-literal grammar; everything else is
/// interpreted leniently.
pub(crate) fn parse(raw: &str) -> Result<Annotation, String> {
    let (name, rest) =
        scan_name(raw).ok_or_else(|| format!("no variable name in annotation '{raw}'"))?;

    let mut default = None;
    let mut required = None;
    for clause in clauses(rest) {
        let Some((key, value)) = split_clause(clause) else {
            continue;
        };
        match key {
            "require" if required.is_none() => {
                let literal = value.trim();
                required = Some(parse_bool_literal(literal).ok_or_else(|| {
                    format!("invalid boolean literal '{literal}' for require")
                })?);
            }
            "default" if default.is_none() => default = Some(value.to_string()),
            _ => {}
        }
    }

    Ok(Annotation {
        name: name.to_string(),
        default,
        required: required.unwrap_or(false),
    })
}

/// Extract the variable base name of an annotation, if any.
///
/// Used for prefix composition, where a nested field's annotation
/// contributes only its name token.
pub(crate) fn base_name(raw: &str) -> Option<&str> {
    scan_name(raw).map(|(name, _)| name)
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// First `[A-Za-z_][A-Za-z0-9_]*` token anywhere in the string, plus the
/// remainder after it.
fn scan_name(raw: &str) -> Option<(&str, &str)> {
    let start = raw.find(is_ident_start)?;
    let tail = &raw[start..];
    let len = tail
        .char_indices()
        .find(|(_, c)| !is_ident_continue(*c))
        .map_or(tail.len(), |(i, _)| i);
    Some((&tail[..len], &tail[len..]))
}

/// Iterate the `key = value` clauses of the text following the name.
///
/// A clause starts at a comma followed by an identifier and `=`; its value
/// runs up to the next such boundary, never to the next raw comma, so
/// bracketed sequence defaults keep their interior commas. Text before the
/// first boundary is not a clause and is dropped.
fn clauses<'s>(rest: &'s str) -> impl Iterator<Item = &'s str> + 's {
    let commas: Vec<usize> = rest
        .char_indices()
        .filter(|&(i, c)| c == ',' && is_clause_start(&rest[i + 1..]))
        .map(|(i, _)| i)
        .collect();
    let count = commas.len();
    (0..count).map(move |k| {
        let lo = commas[k] + 1;
        let hi = commas.get(k + 1).copied().unwrap_or(rest.len());
        &rest[lo..hi]
    })
}

/// Does the text after a comma begin with `ident =`?
fn is_clause_start(after_comma: &str) -> bool {
    let trimmed = after_comma.trim_start();
    if !trimmed.starts_with(is_ident_start) {
        return false;
    }
    match scan_name(trimmed) {
        Some((_, tail)) => tail.trim_start().starts_with('='),
        None => false,
    }
}

/// Split one clause into a trimmed key and its value text. The value keeps
/// everything after `=` except leading whitespace.
fn split_clause(clause: &str) -> Option<(&str, &str)> {
    let (key, value) = clause.split_once('=')?;
    let key = key.trim();
    let mut chars = key.chars();
    let first = chars.next()?;
    if !is_ident_start(first) || !chars.all(is_ident_continue) {
        return None;
    }
    Some((key, value.trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_name() {
        let ann = parse("TOKEN_ID").unwrap();
        assert_eq!(ann.name, "TOKEN_ID");
        assert_eq!(ann.default, None);
        assert!(!ann.required);
    }

    #[test]
    fn test_parse_require_and_default() {
        let ann = parse("TOKEN_ID, require=true, default=66").unwrap();
        assert_eq!(ann.name, "TOKEN_ID");
        assert_eq!(ann.default.as_deref(), Some("66"));
        assert!(ann.required);
    }

    #[test]
    fn test_clause_order_is_insignificant() {
        let ann = parse("TOKEN_VALUE, default = AAAA, require=true").unwrap();
        assert_eq!(ann.default.as_deref(), Some("AAAA"));
        assert!(ann.required);
    }

    #[test]
    fn test_spaces_around_key_and_equals() {
        let ann = parse("TOKEN_RATIO, default = 0.5").unwrap();
        assert_eq!(ann.default.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_sequence_default_keeps_interior_commas() {
        let ann = parse("TOKEN_HOURS, default=[2,5,10]").unwrap();
        assert_eq!(ann.default.as_deref(), Some("[2,5,10]"));
    }

    #[test]
    fn test_sequence_default_keeps_interior_commas_before_next_clause() {
        let ann = parse("TOKEN_HOURS, default=[2,5,10], require=false").unwrap();
        assert_eq!(ann.default.as_deref(), Some("[2,5,10]"));
        assert!(!ann.required);
    }

    #[test]
    fn test_default_value_keeps_trailing_text() {
        let ann = parse("ARR, default= [abc, xyz, 123] ").unwrap();
        assert_eq!(ann.default.as_deref(), Some("[abc, xyz, 123] "));
    }

    #[test]
    fn test_default_value_with_special_symbols() {
        let ann = parse(r"TOKEN_ID, default=----~<>/?.;:/!@#$%^&*()_+_=---\-").unwrap();
        assert_eq!(ann.default.as_deref(), Some(r"----~<>/?.;:/!@#$%^&*()_+_=---\-"));
    }

    #[test]
    fn test_empty_default() {
        let ann = parse("TOKEN_VALUE, default=").unwrap();
        assert_eq!(ann.default.as_deref(), Some(""));
    }

    #[test]
    fn test_trailing_junk_after_name_is_ignored() {
        let ann = parse("GG%%^").unwrap();
        assert_eq!(ann.name, "GG");
        assert_eq!(ann.default, None);
        assert!(!ann.required);
    }

    #[test]
    fn test_keyless_clause_is_ignored() {
        let ann = parse("TOKEN_HOURS, default[]").unwrap();
        assert_eq!(ann.name, "TOKEN_HOURS");
        assert_eq!(ann.default, None);
    }

    #[test]
    fn test_unrecognized_key_is_ignored() {
        let ann = parse("ENV_INT, protected=true, default=100").unwrap();
        assert_eq!(ann.default.as_deref(), Some("100"));
        let ann = parse("ENV_FLOAT64, default=100, protected =true").unwrap();
        assert_eq!(ann.default.as_deref(), Some("100"));
    }

    #[test]
    fn test_first_occurrence_of_a_key_wins() {
        let ann = parse("TOKEN_ID, default=1, default=2").unwrap();
        assert_eq!(ann.default.as_deref(), Some("1"));
    }

    #[test]
    fn test_require_boolean_literals() {
        assert!(parse("V, require=1").unwrap().required);
        assert!(parse("V, require=T").unwrap().required);
        assert!(parse("V, require=True").unwrap().required);
        assert!(!parse("V, require=0").unwrap().required);
        assert!(!parse("V, require=F").unwrap().required);
        assert!(!parse("V, require=false").unwrap().required);
    }

    #[test]
    fn test_require_outside_boolean_grammar_is_malformed() {
        assert!(parse("V, require=banana").is_err());
    }

    #[test]
    fn test_no_identifier_is_malformed() {
        assert!(parse("").is_err());
        assert!(parse("%%^!").is_err());
        assert!(parse("123").is_err());
    }

    #[test]
    fn test_name_skips_leading_non_identifier_text() {
        assert_eq!(parse("123ABC").unwrap().name, "ABC");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("PRIMARY"), Some("PRIMARY"));
        assert_eq!(base_name("PRIMARY, require=true"), Some("PRIMARY"));
        assert_eq!(base_name("%%%"), None);
    }
}
