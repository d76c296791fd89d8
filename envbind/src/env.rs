//! Environment access
//!
//! The binder never reads the process environment directly; it works
//! against a [`Snapshot`] captured once per bind call. Tests build
//! synthetic snapshots with [`Snapshot::with`] and stay deterministic
//! without touching process-wide state.

use std::collections::BTreeMap;
use std::env;

/// An ordered capture of environment variables.
///
/// A variable that is *present* with empty text is distinguishable from an
/// absent one: required-field checks look at presence, value resolution
/// treats empty text as unset.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    vars: BTreeMap<String, String>,
}

impl Snapshot {
    /// An empty snapshot. Useful as a base for [`Snapshot::with`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped, which
    /// makes them indistinguishable from absent ones.
    pub fn from_process() -> Self {
        Self {
            vars: env::vars_os()
                .filter_map(|(name, value)| {
                    Some((name.into_string().ok()?, value.into_string().ok()?))
                })
                .collect(),
        }
    }

    /// Return a snapshot extended with one variable.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Whether the variable exists at all, empty or not.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// The raw text of the variable; `Some("")` when present but empty.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}
