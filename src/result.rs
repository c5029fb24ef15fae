//! Result type used throughout commit-mirror.
//!
//! Errors are reported through `color-eyre`, which gives colorized output
//! and lets context be attached with `.wrap_err()` as failures propagate up
//! to the binary. Conditions callers may want to tell apart are defined in
//! [`crate::error::MirrorError`] and travel inside the report, where they
//! can be recovered with `downcast_ref`.
//!
//! ```rust,ignore
//! use crate::result::Result;
//! use color_eyre::eyre::Context;
//!
//! fn load(path: &str) -> Result<String> {
//!     let content = std::fs::read_to_string(path)
//!         .wrap_err("failed to read configuration file")?;
//!     Ok(content)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout commit-mirror.
pub type Result<T> = EyreResult<T>;
