//! Application of a binding plan to its record

use crate::coerce;
use crate::error::BindError;
use crate::plan::{AnnotatedField, BindingPlan, Slot};
use crate::value::Value;

/// Write every plan entry's resolved value into its field.
///
/// Entries are processed in path order; the first error aborts the rest,
/// and fields written before it stay written.
///
/// Per entry: the default text, when present, is coerced before the live
/// value is consulted, so a malformed default fails the bind even when the
/// variable is set to something valid. The effective value is then the
/// environment text when present and non-empty, else the coerced default,
/// else the kind's zero value. Absent variables overwrite the field, they
/// never leave it at its prior content.
pub(crate) fn apply(plan: BindingPlan<'_>) -> Result<(), BindError> {
    for (path, entry) in plan.entries {
        let AnnotatedField { binding, slot } = entry;
        let slot = match slot {
            Slot::Typed(slot) => slot,
            Slot::Unsupported(declared) => {
                return Err(BindError::UnsupportedType {
                    path,
                    declared: declared.to_string(),
                });
            }
        };
        let kind = slot.kind();

        let fallback = match &binding.default {
            Some(raw) => Some(coerce::coerce(raw, kind).map_err(|err| {
                BindError::DefaultConversion {
                    variable: binding.variable.clone(),
                    raw: err.raw,
                    kind,
                }
            })?),
            None => None,
        };

        let live = binding.value.as_deref().filter(|text| !text.is_empty());
        let value = match live {
            Some(raw) => coerce::coerce(raw, kind).map_err(|err| BindError::ValueConversion {
                variable: binding.variable.clone(),
                raw: err.raw,
                kind,
            })?,
            None => fallback.unwrap_or_else(|| Value::zero(kind)),
        };

        slot.store(value);
    }
    Ok(())
}
