//! Construction-time errors
//!
//! Gameplay "failures" (lost items, stray input, dead handles) are ordinary
//! branches handled inline. Only building a session can fail.

use core::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// A configuration value is out of range
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// Shape table JSON could not be parsed
    ShapeTable(String),
    /// The physics collaborator could not be created
    PhysicsUnavailable(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config `{}`: {}", field, reason)
            }
            Self::ShapeTable(msg) => write!(f, "malformed shape table: {}", msg),
            Self::PhysicsUnavailable(msg) => write!(f, "physics world unavailable: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}
