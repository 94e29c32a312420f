//! Unifier settings

/// Settings read once at the start of each unification call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Refuse to bind a variable to a term which contains it.
    ///
    /// Off by default. With the check disabled such a binding succeeds and
    /// describes a cyclic (rational) term
    pub occurs_check: bool,
}

impl Config {
    /// Constructor, equivalent to [`Config::default`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            occurs_check: false,
        }
    }

    /// Return a copy of this config with the occurs-check set to `enabled`
    #[must_use]
    pub const fn with_occurs_check(self, enabled: bool) -> Self {
        Self {
            occurs_check: enabled,
        }
    }
}
