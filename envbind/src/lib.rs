//! Environment variable binding for nested configuration structs
//!
//! `envbind` populates a struct's fields from environment variables,
//! driven by a per-field annotation string that names the variable and
//! optionally marks it required or gives it a default:
//!
//! ```text
//! NAME[, require=<bool>][, default=<text>]
//! ```
//!
//! Binding mutates the record in place. Every annotated field is written
//! on success: a set, non-empty variable wins, otherwise the default
//! applies, and a field with neither gets its type's zero value.
//!
//! # Features
//!
//! - **Declarative**: automatic implementation with `#[derive(EnvBind)]`
//! - **Nested records**: structs inside structs, with environment-name
//!   prefixes accumulated from `#[env(nested = "...")]` annotations
//! - **Private fields**: the generated impl lives in the record's scope,
//!   so visibility never decides what binds
//! - **Scalars and sequences**: integers, floats, booleans, strings and
//!   `Vec`s of each, with `[a,b,c]`-style defaults
//! - **Deterministic tests**: bind against an injected [`Snapshot`]
//!   instead of the live process environment
//!
//! # Example
//!
//! ```rust
//! use envbind::{EnvBind, Snapshot};
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env("DATABASE_URL, require=true")]
//!     database_url: String,
//!
//!     #[env("MAX_CONNECTIONS, default=10")]
//!     max_connections: u32,
//!
//!     #[env("DEBUG_MODE, default=false")]
//!     debug_mode: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = Snapshot::new().with("DATABASE_URL", "postgres://localhost/db");
//! let mut config = Config::default();
//! envbind::bind_with(&mut config, &env)?;
//!
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.max_connections, 10);
//! assert!(!config.debug_mode);
//! # Ok(())
//! # }
//! ```
//!
//! # Nested records
//!
//! A nested struct participates when its field carries `#[env(nested)]`;
//! giving the annotation a name makes that name a prefix segment for every
//! descendant variable:
//!
//! ```rust
//! use envbind::{EnvBind, Snapshot};
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Endpoint {
//!     #[env("ENDPOINT_URL, require=true")]
//!     url: String,
//! }
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     // binds url from PRIMARY_ENDPOINT_URL
//!     #[env(nested = "PRIMARY")]
//!     primary: Endpoint,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let env = Snapshot::new().with("PRIMARY_ENDPOINT_URL", "http://localhost:8080");
//! let mut config = Config::default();
//! envbind::bind_with(&mut config, &env)?;
//!
//! assert_eq!(config.primary.url, "http://localhost:8080");
//! # Ok(())
//! # }
//! ```
//!
//! # Sequences
//!
//! `Vec` fields split their text on commas; one surrounding `[...]` pair
//! is cosmetic. String elements keep interior spacing, numeric and boolean
//! elements are trimmed before parsing:
//!
//! ```rust
//! use envbind::{EnvBind, Snapshot};
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env("TOKEN_HOURS, default=[2,5,10]")]
//!     hours: Vec<i64>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut config = Config::default();
//! envbind::bind_with(&mut config, &Snapshot::new())?;
//! assert_eq!(config.hours, vec![2, 5, 10]);
//! # Ok(())
//! # }
//! ```

mod annotation;
mod binder;
mod coerce;
mod env;
mod error;
mod plan;
mod value;

pub use env::Snapshot;
pub use error::BindError;
pub use plan::EnvBind;
pub use value::{Elem, Kind};

pub use envbind_derive::EnvBind;

// Re-exports for macro-generated code
#[doc(hidden)]
pub use plan::{compose_prefix, BindingPlan, Slot};
#[doc(hidden)]
pub use value::{FieldSlot, Value};

/// Bind `target`'s annotated fields from the current process environment.
///
/// Captures the environment once and delegates to [`bind_with`]. The
/// environment is process-wide mutable state; callers are expected to
/// serialize mutation of it relative to bind calls.
///
/// # Errors
///
/// See [`BindError`]; the first error aborts the pass, and fields written
/// before it stay written.
pub fn bind<T: EnvBind>(target: &mut T) -> Result<(), BindError> {
    bind_with(target, &Snapshot::from_process())
}

/// Bind `target`'s annotated fields from an explicit environment snapshot.
///
/// One linear pass: walk the record into a binding plan, then apply the
/// plan. Useful for deterministic tests and for binding against a captured
/// or synthetic environment.
pub fn bind_with<T: EnvBind>(target: &mut T, env: &Snapshot) -> Result<(), BindError> {
    let mut plan = BindingPlan::new();
    target.collect(T::TYPE_NAME, "", env, &mut plan)?;
    binder::apply(plan)
}
