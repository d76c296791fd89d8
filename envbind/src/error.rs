//! Error types for environment binding

use crate::value::Kind;

/// Errors that can occur while binding a record from the environment.
///
/// Every variant is terminal for the current bind call: there is no partial
/// success value, and fields written before the error stay written.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The field's binding annotation does not match the expected grammar.
    ///
    /// Raised during the walk, before any field is written.
    #[error("binding annotation on '{path}' is malformed: {reason}")]
    Annotation {
        /// Structural path of the annotated field (e.g. `Config.id`)
        path: String,
        /// What the parser could not accept
        reason: String,
    },

    /// A field marked `require=true` has no corresponding environment
    /// variable.
    ///
    /// Presence is what counts: a variable set to the empty string
    /// satisfies the requirement (and then binds through its default). A
    /// default never excuses an absent required variable.
    #[error("environment variable '{variable}' is required but not set")]
    Required {
        /// Fully prefixed name of the missing variable
        variable: String,
    },

    /// The annotation's default text cannot be converted to the field's
    /// declared type.
    ///
    /// Defaults are type-checked eagerly, so this is raised even when the
    /// live environment value would have been used.
    #[error("can't convert default value '{raw}' of '{variable}' to {kind}")]
    DefaultConversion {
        /// Fully prefixed variable name
        variable: String,
        /// The default text that failed to convert
        raw: String,
        /// Target kind of the field
        kind: Kind,
    },

    /// A present, non-empty environment value cannot be converted to the
    /// field's declared type.
    #[error("can't parse value '{raw}' of '{variable}' as {kind}")]
    ValueConversion {
        /// Fully prefixed variable name
        variable: String,
        /// The environment text that failed to convert
        raw: String,
        /// Target kind of the field
        kind: Kind,
    },

    /// The field's declared type is outside the supported scalar/sequence
    /// set.
    #[error("unsupported type {declared} of field '{path}'")]
    UnsupportedType {
        /// Structural path of the field
        path: String,
        /// The declared Rust type, as written
        declared: String,
    },
}
