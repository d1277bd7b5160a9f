//! Engine configuration.
//!
//! # Environment Variable
//!
//! [`TypifyConfig::from_env`] reads `RSTY_MAX_DEPTH`:
//! - a number sets the recursion depth limit
//! - `none` or `unbounded` removes the limit (the default)
//!
//! The shared default configuration used by [`TypifyEngine::new`] is read
//! from the environment once, on first use.
//!
//! Example: `RSTY_MAX_DEPTH=1024 cargo test`
//!
//! [`TypifyEngine::new`]: crate::TypifyEngine::new

use std::num::ParseIntError;
use std::sync::OnceLock;

use rsty_types::{FloatKind, IntKind, PrimitiveTable};

/// Environment variable overriding [`TypifyConfig::max_depth`].
pub const MAX_DEPTH_VAR: &str = "RSTY_MAX_DEPTH";

/// Knobs of the typing rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypifyConfig {
    /// Spellings that name primitive types.
    pub primitives: PrimitiveTable,
    /// Kind of an unsuffixed integer literal.
    pub default_int: IntKind,
    /// Kind of an unsuffixed float literal.
    pub default_float: FloatKind,
    /// Nested typing requests allowed before giving up with `Unknown`.
    /// `None` means no limit; cycles are caught without it.
    pub max_depth: Option<u32>,
}

impl TypifyConfig {
    /// Defaults with the `RSTY_MAX_DEPTH` override applied.
    ///
    /// An unparseable value is logged and ignored.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(MAX_DEPTH_VAR) {
            Ok(raw) => match parse_max_depth(&raw) {
                Ok(max_depth) => config.with_max_depth(max_depth),
                Err(error) => {
                    tracing::warn!(var = MAX_DEPTH_VAR, value = %raw, %error, "ignoring invalid depth limit");
                    config
                }
            },
            Err(_) => config,
        }
    }

    /// Shared configuration: [`from_env`](Self::from_env), read once.
    pub fn shared_default() -> &'static TypifyConfig {
        static DEFAULT: OnceLock<TypifyConfig> = OnceLock::new();
        DEFAULT.get_or_init(TypifyConfig::from_env)
    }

    #[must_use]
    pub fn with_primitives(mut self, primitives: PrimitiveTable) -> Self {
        self.primitives = primitives;
        self
    }

    #[must_use]
    pub fn with_default_int(mut self, kind: IntKind) -> Self {
        self.default_int = kind;
        self
    }

    #[must_use]
    pub fn with_default_float(mut self, kind: FloatKind) -> Self {
        self.default_float = kind;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for TypifyConfig {
    fn default() -> Self {
        TypifyConfig {
            primitives: PrimitiveTable::rust(),
            default_int: IntKind::I32,
            default_float: FloatKind::F64,
            max_depth: None,
        }
    }
}

/// Parse a `RSTY_MAX_DEPTH` value.
///
/// `Ok(None)` is an explicit "no limit".
pub fn parse_max_depth(raw: &str) -> Result<Option<u32>, ParseIntError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("unbounded") {
        return Ok(None);
    }
    raw.parse::<u32>().map(Some)
}

#[cfg(test)]
mod tests;
