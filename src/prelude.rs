//! Commonly used items for convenient importing.
//!
//! # Usage
//!
//! ```rust
//! use reraise::prelude::*;
//!
//! fn divide(a: i32, b: i32) -> Result<i32, Error> {
//!     if b == 0 {
//!         raise!("cannot divide by zero");
//!     }
//!     Ok(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).unwrap(), 5);
//! assert!(divide(1, 0).is_err());
//! ```
//!
//! # What's Included
//!
//! - **[`Error`]**: the in-flight error value
//! - **[`reraise()`]** / **[`reraise_with_separator`]** and **[`normalize()`]**:
//!   the two core operations
//! - **[`ResultExt`]**: re-raising adapters for `Result`
//! - **[`IntoError`]**: the conversion seam for foreign errors
//! - **[`SpecialKind`]**: the closed set of built-in kinds
//! - **[`raised!`]** and **[`raise!`]**: macros for creating and returning
//!   errors

pub use crate::{
    Error, IntoError, ResultExt, SpecialKind, normalize, raise, raised, reraise,
    reraise_with_separator,
};
