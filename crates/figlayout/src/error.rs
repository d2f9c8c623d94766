use crate::figure::HostError;
use std::fmt;

/// Errors surfaced by layout operations.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// Caller-supplied argument cannot describe a layout (e.g. zero splits).
    InvalidArgument { reason: String },
    /// The host figure rejected a request; passed through unchanged.
    Host(HostError),
}

impl LayoutError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Host(err) => write!(f, "host figure: {err}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Host(err) => Some(err),
            Self::InvalidArgument { .. } => None,
        }
    }
}

impl From<HostError> for LayoutError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}
