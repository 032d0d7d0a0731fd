//! Registrar-Common: shared types used across registrar.
//!
//! - **Typed IDs**: string newtypes for students, courses and registrations
//! - **Error Handling**: the common error type and result alias
//!
//! # Examples
//!
//! ```
//! use registrar_common::{Error, Result, StudentId};
//!
//! let id = StudentId::from("S1");
//! assert_eq!(id.as_str(), "S1");
//!
//! fn insert() -> Result<()> {
//!     Err(Error::constraint("FOREIGN KEY constraint failed"))
//! }
//! assert!(insert().unwrap_err().is_constraint());
//! ```

pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;
