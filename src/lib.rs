//! Fluent builder for conditional whitespace-delimited token strings,
//! typically CSS class lists.
//!
//! ```
//! use tokenline::builder;
//!
//! let line = builder("btn")
//!     .add(true, "btn-primary")
//!     .add_flags([("disabled", false), ("active", true)])
//!     .end();
//! assert_eq!(line, "btn btn-primary active");
//! ```

/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("config", "Loaded config from {}", path);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod builder;
pub mod case;
pub mod config;
pub mod error;

pub use builder::{TokenBuilder, TokenInput};
pub use config::{BuilderConfig, ConfigPatch};
pub use error::{Error, Result};

/// Construct a [`TokenBuilder`] seeded with an optional base token.
///
/// An empty `base` yields an empty builder.
pub fn builder(base: &str) -> TokenBuilder {
    TokenBuilder::with_base(base)
}
