use std::fmt;

use http::StatusCode;

/// Outcome of evaluating a request at the HTTPS gate.
///
/// Exactly one variant is produced per request. The hosting framework acts
/// on it: continue, redirect, or write an error status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the request through untouched.
    Allow,
    /// Send a permanent (301) redirect to the given HTTPS URL.
    RedirectPermanently {
        /// Fully-qualified `https://` target
        url: String,
    },
    /// Refuse the request with the given status.
    Reject {
        /// Status to report, 403 Forbidden unless a handler chose otherwise
        status: StatusCode,
    },
}

impl Decision {
    /// The default outcome for a non-HTTPS unsafe request: `403 Forbidden`.
    pub fn forbidden() -> Self {
        Self::reject(StatusCode::FORBIDDEN)
    }

    /// Rejects with an arbitrary status.
    pub fn reject(status: StatusCode) -> Self {
        Self::Reject { status }
    }

    /// Redirects permanently to `url`.
    pub fn redirect_permanently(url: impl Into<String>) -> Self {
        Self::RedirectPermanently { url: url.into() }
    }

    /// Returns `true` for [`Decision::Allow`].
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Short label, emitted as the `decision` field of gate log events.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::RedirectPermanently { .. } => "redirect",
            Self::Reject { .. } => "reject",
        }
    }

    /// Status the framework should write, or `None` when the request proceeds.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Allow => None,
            Self::RedirectPermanently { .. } => Some(StatusCode::MOVED_PERMANENTLY),
            Self::Reject { status } => Some(*status),
        }
    }

    /// Redirect target, if this is a redirect.
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::RedirectPermanently { url } => Some(url),
            _ => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "allow"),
            Decision::RedirectPermanently { url } => write!(f, "redirect (301) to {}", url),
            Decision::Reject { status } => write!(f, "reject ({})", status),
        }
    }
}
