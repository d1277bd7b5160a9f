//! rsty typeck - type derivation for a Rust-like syntax tree.
//!
//! Computes the static type of expressions, type annotations and declared
//! items in a partially resolved tree. Typing is synthesis only: each
//! node's type follows from its shape, its children and the declarations
//! its names resolve to. Whenever that is not enough the answer is
//! [`Ty::Unknown`], never an error.
//!
//! # Main Entry Points
//!
//! - [`TypifyEngine`]: the facade (`typify_expr`, `typify_item`,
//!   `typify_type_annotation`, `typify`)
//! - [`TypifyEngineBuilder`]: engine construction with a custom
//!   [`TypifyConfig`] or [`BindingInference`]
//! - [`type_at_offset`]: hover query
//!
//! # Module Organization
//!
//! - `engine`: facade, dispatch for named entities, cycle and depth guards
//! - `expr`: expression rules
//! - `item`: item rules
//! - `annotation`: type-annotation shapes
//! - `derive`: self type, binding type, function type, variant type,
//!   struct literal type
//! - `binding_inference`: narrowing a pattern type to one binding
//! - `resolver`: the name resolution capability the engine consumes
//!
//! [`Ty::Unknown`]: rsty_types::Ty::Unknown

mod annotation;
mod binding_inference;
mod config;
mod derive;
mod engine;
mod error;
mod expr;
mod item;
mod query;
mod resolver;
mod stack;

use std::sync::Once;

pub use binding_inference::{
    BindingInference, IdentityBindingInference, StructuralBindingInference,
};
pub use config::{parse_max_depth, TypifyConfig, MAX_DEPTH_VAR};
pub use engine::{TypifyEngine, TypifyEngineBuilder};
pub use error::TypifyError;
pub use query::type_at_offset;
pub use resolver::{NullResolver, ResolvedNames, Resolver};
pub use stack::ensure_sufficient_stack;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Call this early to enable trace output. Controlled by the `RUST_LOG`
/// environment variable:
/// - `RUST_LOG=rsty_typeck=debug` - resolution misses
/// - `RUST_LOG=rsty_typeck=trace` - every typing request
///
/// Does nothing when `RUST_LOG` is unset, and only the first call has an
/// effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
