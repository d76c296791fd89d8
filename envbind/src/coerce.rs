//! Conversion of raw environment text into typed values

use crate::value::{Elem, Kind, Value};

/// A raw text that could not be converted to its target kind.
///
/// For sequences, `raw` is the full attempted text, not the failing
/// element.
#[derive(Debug)]
pub(crate) struct CoerceError {
    pub(crate) raw: String,
    pub(crate) kind: Kind,
}

/// Convert raw text (an environment value or a default) to `kind`.
pub(crate) fn coerce(raw: &str, kind: Kind) -> Result<Value, CoerceError> {
    let fail = || CoerceError {
        raw: raw.to_string(),
        kind,
    };
    match kind {
        Kind::Int => raw.parse::<i64>().map(Value::Int).map_err(|_| fail()),
        Kind::Float => raw.parse::<f64>().map(Value::Float).map_err(|_| fail()),
        Kind::Bool => parse_bool_literal(raw).map(Value::Bool).ok_or_else(fail),
        Kind::Str => Ok(Value::Str(raw.to_string())),
        Kind::Seq(elem) => coerce_sequence(raw, elem).ok_or_else(fail),
    }
}

fn coerce_sequence(raw: &str, elem: Elem) -> Option<Value> {
    let parts = elements(raw);
    match elem {
        Elem::Str => Some(Value::StrSeq(
            parts.into_iter().map(str::to_string).collect(),
        )),
        Elem::Int => parts
            .into_iter()
            .map(|s| s.trim().parse::<i64>().ok())
            .collect::<Option<Vec<_>>>()
            .map(Value::IntSeq),
        Elem::Float => parts
            .into_iter()
            .map(|s| s.trim().parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()
            .map(Value::FloatSeq),
        Elem::Bool => parts
            .into_iter()
            .map(|s| parse_bool_literal(s.trim()))
            .collect::<Option<Vec<_>>>()
            .map(Value::BoolSeq),
    }
}

/// Split sequence text into element substrings.
///
/// Surrounding whitespace and one cosmetic `[` / `]` pair are stripped,
/// then the text splits on `,`. Elements are returned verbatim; whether
/// they are trimmed further depends on the element type (string elements
/// keep their interior spacing). Empty text yields no elements rather than
/// a single empty one.
fn elements(raw: &str) -> Vec<&str> {
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix('[').unwrap_or(trimmed);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    if inner.is_empty() {
        return Vec::new();
    }
    inner.split(',').collect()
}

/// The permissive boolean-literal grammar shared by `require` clauses and
/// boolean field values.
pub(crate) fn parse_bool_literal(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
