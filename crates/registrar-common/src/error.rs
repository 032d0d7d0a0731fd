//! Common error types used throughout registrar.
//!
//! Every failure the seed-and-report routine can hit is a database failure of
//! some kind; constraint violations get their own variant so callers can tell
//! a rejected row apart from a broken connection.

/// Common error type for registrar.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// The database rejected a row because of a key or foreign-key constraint.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl Error {
    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }

    /// Create a new Constraint error.
    pub fn constraint<S: Into<String>>(msg: S) -> Self {
        Self::Constraint(msg.into())
    }

    /// Whether this error came from a violated database constraint.
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
