//! Binding plan construction
//!
//! The derive macro generates, per record type, an `EnvBind::collect`
//! implementation that visits the record's own fields with an accumulated
//! prefix and registers one plan entry per annotated leaf. The plan is the
//! flat, path-keyed output of that walk; the binder consumes it.

use std::collections::BTreeMap;

use crate::annotation;
use crate::env::Snapshot;
use crate::error::BindError;
use crate::value::FieldSlot;

/// A record type whose fields can be bound from the environment.
///
/// Implement via `#[derive(EnvBind)]`; the generated impl lives in the
/// record's own scope, so private fields participate like public ones.
pub trait EnvBind {
    #[doc(hidden)]
    const TYPE_NAME: &'static str;

    /// Walk this record's fields into `plan`.
    ///
    /// `path` is the structural path of the record itself, `prefix` the
    /// accumulated environment-name prefix.
    #[doc(hidden)]
    fn collect<'a>(
        &'a mut self,
        path: &str,
        prefix: &str,
        env: &Snapshot,
        plan: &mut BindingPlan<'a>,
    ) -> Result<(), BindError>;
}

/// One leaf field's resolved binding descriptor.
#[derive(Clone, Debug)]
pub(crate) struct Binding {
    /// Fully prefixed environment variable name.
    pub(crate) variable: String,
    /// Raw default text from the annotation.
    pub(crate) default: Option<String>,
    /// Raw environment text; `Some("")` when present but empty, `None`
    /// when absent.
    pub(crate) value: Option<String>,
}

/// Write destination of one plan entry.
#[doc(hidden)]
pub enum Slot<'a> {
    /// A supported leaf field.
    Typed(&'a mut dyn FieldSlot),
    /// A declared type outside the supported set; reported at bind time.
    Unsupported(&'static str),
}

pub(crate) struct AnnotatedField<'a> {
    pub(crate) binding: Binding,
    pub(crate) slot: Slot<'a>,
}

/// The flattened result of walking a record: one entry per annotated leaf
/// field, keyed by structural path.
///
/// Keys are unique by construction (sibling names cannot collide and the
/// parent chain is part of the key); two entries may share a variable name
/// and are bound independently.
#[doc(hidden)]
#[derive(Default)]
pub struct BindingPlan<'a> {
    pub(crate) entries: BTreeMap<String, AnnotatedField<'a>>,
}

impl<'a> BindingPlan<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries collected so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register one annotated leaf field.
    ///
    /// Parses the annotation, resolves the variable name against `prefix`,
    /// captures presence and raw text from `env`, and enforces the
    /// required-field constraint immediately: a required variable absent
    /// from the environment aborts the walk regardless of any default.
    pub fn leaf(
        &mut self,
        path: &str,
        raw: &str,
        prefix: &str,
        env: &Snapshot,
        slot: Slot<'a>,
    ) -> Result<(), BindError> {
        let parsed = annotation::parse(raw).map_err(|reason| BindError::Annotation {
            path: path.to_string(),
            reason,
        })?;
        let variable = join(prefix, &parsed.name);
        if parsed.required && !env.contains(&variable) {
            return Err(BindError::Required { variable });
        }
        let value = env.lookup(&variable).map(str::to_string);
        self.entries.insert(
            path.to_string(),
            AnnotatedField {
                binding: Binding {
                    variable,
                    default: parsed.default,
                    value,
                },
                slot,
            },
        );
        Ok(())
    }
}

/// Extend `prefix` with the base name of a nested field's annotation.
///
/// `None` (no annotation) and annotations without an extractable name leave
/// the prefix unchanged.
///
/// Used by macro-generated code.
#[doc(hidden)]
pub fn compose_prefix(prefix: &str, nested: Option<&str>) -> String {
    match nested.and_then(annotation::base_name) {
        Some(name) => join(prefix, name),
        None => prefix.to_string(),
    }
}

/// Underscore-join, omitting the separator when either half is empty.
fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() || name.is_empty() {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}_{name}")
    }
}
