//! Typed ID wrappers for the three registrar tables.
//!
//! Every key in the schema is a short string (`S1`, `C4`, `R12`). Wrapping
//! them keeps a course ID from being passed where a student ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! typed_id {
    ($($(#[doc = $doc:expr])* $name:ident),+ $(,)?) => {
        $(
            $(#[doc = $doc])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(String);

            impl $name {
                /// Wrap a raw key value.
                #[must_use]
                pub fn new<S: Into<String>>(value: S) -> Self {
                    Self(value.into())
                }

                /// Borrow the raw key value.
                #[must_use]
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl From<$name> for String {
                fn from(id: $name) -> Self {
                    id.0
                }
            }
        )+
    };
}

typed_id! {
    /// Primary key of the `Student` table.
    StudentId,
    /// Primary key of the `Course` table.
    CourseId,
    /// Primary key of the `Registration` table.
    RegistrationId,
}
